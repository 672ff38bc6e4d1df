use crate::deck::{CardSource, CardValue, ACE_HIGH, ACE_LOW};
use std::cmp::Ordering;
use std::fmt;

/// Best possible hand value. Going over it is a bust.
pub const BLACKJACK: u16 = 21;

/// What a hand is worth once scored.
///
/// A natural (two cards worth 21) is kept apart from a plain 21 so it can never be confused with
/// a numeric total.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Score {
    Blackjack,
    Points(u16),
}

impl Score {
    /// The numeric total, or None for a natural
    pub fn points(self) -> Option<u16> {
        match self {
            Score::Blackjack => None,
            Score::Points(p) => Some(p),
        }
    }

    pub fn is_blackjack(self) -> bool {
        self == Score::Blackjack
    }

    pub fn is_bust(self) -> bool {
        match self {
            Score::Blackjack => false,
            Score::Points(p) => p > BLACKJACK,
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    /// A natural beats any total. Totals compare numerically.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Blackjack, Score::Blackjack) => Ordering::Equal,
            (Score::Blackjack, Score::Points(_)) => Ordering::Greater,
            (Score::Points(_), Score::Blackjack) => Ordering::Less,
            (Score::Points(a), Score::Points(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Blackjack => write!(f, "blackjack"),
            Score::Points(p) => write!(f, "{}", p),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Hand {
    pub(crate) cards: Vec<CardValue>,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

impl Hand {
    pub fn new(cards: &[CardValue]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Take the opening two cards from the source
    pub fn deal<S>(source: &mut S) -> Self
    where
        S: CardSource + ?Sized,
    {
        let first = source.draw();
        let second = source.draw();
        Self::new(&[first, second])
    }

    /// Add a card to the hand. Nothing is rescored until Hand::score() is called again.
    pub fn push(&mut self, c: CardValue) {
        self.cards.push(c);
    }

    /// Plain sum of the card values as they currently stand. Aces already demoted count as 1.
    pub fn sum(&self) -> u16 {
        self.cards.iter().map(|&c| u16::from(c)).sum()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of Aces still counted as 11
    pub fn high_aces(&self) -> usize {
        self.cards.iter().filter(|&&c| c == ACE_HIGH).count()
    }

    /// Returns an interator over the card values in this hand
    pub fn cards(&self) -> impl Iterator<Item = &CardValue> {
        self.cards.iter()
    }

    /// Score the hand.
    ///
    /// Two cards worth 21 is a natural no matter what they are. Otherwise, while the hand is over
    /// 21 and still holds an Ace worth 11, exactly one such Ace is rewritten to 1 and the sum is
    /// checked again. Demotion stops as soon as the hand is at or under 21, so a hand may keep
    /// high Aces it does not need to give up. The demotions stick: the hand is modified in place
    /// and later calls start from the demoted values.
    ///
    /// The returned total may still be over 21, which is a bust.
    pub fn score(&mut self) -> Score {
        let mut sum = self.sum();
        if sum == BLACKJACK && self.len() == 2 {
            return Score::Blackjack;
        }
        while sum > BLACKJACK {
            match self.cards.iter().position(|&c| c == ACE_HIGH) {
                Some(idx) => {
                    self.cards[idx] = ACE_LOW;
                    sum = self.sum();
                }
                None => break,
            }
        }
        Score::Points(sum)
    }
}

/// Free-function form of Hand::score()
pub fn calculate_score(hand: &mut Hand) -> Score {
    hand.score()
}
