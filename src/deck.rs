//! Card source for the simulator.
//!
//! Cards are plain values: 2 through 10 are worth their number and an Ace starts out worth 11.
//! Drawing never removes anything from the pool, so the "deck" behaves like an infinite shoe. Ten
//! shows up four times in the pool (ten, jack, queen, king) and the Ace once, so a draw is a
//! weighted pick over the ten possible values.
use rand::prelude::*;

/// The value of a single card. 11 is an Ace counted high; scoring may later demote it to 1.
pub type CardValue = u8;

pub const ACE_HIGH: CardValue = 11;
pub const ACE_LOW: CardValue = 1;

/// Every card value a draw can produce, with face cards folded into the extra 10s.
pub const CARD_POOL: [CardValue; 13] = [ACE_HIGH, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// Pick one card uniformly at random from [`CARD_POOL`]
pub fn deal_card<R>(rng: &mut R) -> CardValue
where
    R: Rng + ?Sized,
{
    CARD_POOL[rng.gen_range(0, CARD_POOL.len())]
}

/// Anything the game can pull cards from, one at a time.
pub trait CardSource {
    fn draw(&mut self) -> CardValue;
}

/// A shoe that never runs out and never remembers what it dealt.
pub struct InfiniteDeck<R> {
    rng: R,
}

impl<R> InfiniteDeck<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl InfiniteDeck<StdRng> {
    /// Deck whose draws are reproducible for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Deck seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R> CardSource for InfiniteDeck<R>
where
    R: Rng,
{
    fn draw(&mut self) -> CardValue {
        deal_card(&mut self.rng)
    }
}
