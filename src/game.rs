//! One complete, non-interactive game: player and dealer each get two cards, naturals are
//! settled immediately, then both sides draw until they reach 17 and the totals are compared.
use crate::deck::{CardSource, InfiniteDeck};
use crate::hand::{Hand, Score, BLACKJACK};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Both sides keep drawing while their total is below this
pub const STAND_ON: u16 = 17;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player won on totals or the dealer busted
    Player,
    /// Dealer won on totals, the player busted, or the dealer alone had a natural
    Dealer,
    /// Equal totals, or both sides had a natural
    Push,
    /// Player alone had a natural
    Blackjack,
}

pub const ALL_OUTCOMES: [Outcome; 4] = [
    Outcome::Player,
    Outcome::Dealer,
    Outcome::Push,
    Outcome::Blackjack,
];

impl Outcome {
    pub fn name(self) -> &'static str {
        match self {
            Outcome::Player => "player",
            Outcome::Dealer => "dealer",
            Outcome::Push => "push",
            Outcome::Blackjack => "blackjack",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How one side's turn ended
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Turn {
    Stand(u16),
    Bust,
}

/// Draw until the hand is worth at least STAND_ON. A natural never draws.
fn stand_on_17<S>(hand: &mut Hand, source: &mut S) -> Turn
where
    S: CardSource + ?Sized,
{
    let mut points = match hand.score() {
        Score::Points(p) => p,
        Score::Blackjack => return Turn::Stand(BLACKJACK),
    };
    while points < STAND_ON {
        hand.push(source.draw());
        points = match hand.score() {
            Score::Points(p) => p,
            Score::Blackjack => BLACKJACK,
        };
        if points > BLACKJACK {
            return Turn::Bust;
        }
    }
    Turn::Stand(points)
}

/// Play one game with cards taken from `source`.
///
/// The player is dealt two cards first, then the dealer. Cards drawn during the player's turn
/// come off the source before any of the dealer's. A player bust ends the game before the dealer
/// draws anything.
///
/// Note that two naturals are scored as an ordinary push, not as a player blackjack.
pub fn play_game<S>(source: &mut S) -> Outcome
where
    S: CardSource + ?Sized,
{
    let mut player = Hand::deal(source);
    let mut dealer = Hand::deal(source);
    match (player.score(), dealer.score()) {
        (Score::Blackjack, Score::Blackjack) => return Outcome::Push,
        (Score::Blackjack, _) => return Outcome::Blackjack,
        (_, Score::Blackjack) => return Outcome::Dealer,
        _ => {}
    }
    let player_points = match stand_on_17(&mut player, source) {
        Turn::Bust => return Outcome::Dealer,
        Turn::Stand(p) => p,
    };
    let dealer_points = match stand_on_17(&mut dealer, source) {
        Turn::Bust => return Outcome::Player,
        Turn::Stand(p) => p,
    };
    if player_points > dealer_points {
        Outcome::Player
    } else if dealer_points > player_points {
        Outcome::Dealer
    } else {
        Outcome::Push
    }
}

/// Play one game from an infinite deck driven by `rng`
pub fn simulate_game<R>(rng: &mut R) -> Outcome
where
    R: Rng + ?Sized,
{
    let mut deck = InfiniteDeck::new(rng);
    play_game(&mut deck)
}
