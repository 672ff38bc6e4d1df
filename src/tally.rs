//! Count how often each outcome happened over a batch of games and turn those counts into
//! percentages.
//!
//! A Tally only stores counts. Percentages are derived from it on demand, and deriving them from
//! an empty Tally is an error rather than a division by zero.
//!
//! - Each percentage is `count / total * 100`
//! - The four percentages add up to 100
//! - House edge is `dealer% - player%`. Blackjacks and pushes don't enter into it.
use crate::game::{Outcome, ALL_OUTCOMES};
use crate::sim::SimError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Default, Debug)]
pub struct Tally {
    player: u64,
    dealer: u64,
    push: u64,
    blackjack: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    pub fn inc(&mut self, outcome: Outcome) {
        self.inc_by(1, outcome)
    }

    pub fn inc_by(&mut self, amt: u64, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += amt,
            Outcome::Dealer => self.dealer += amt,
            Outcome::Push => self.push += amt,
            Outcome::Blackjack => self.blackjack += amt,
        }
    }

    pub fn count(self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Player => self.player,
            Outcome::Dealer => self.dealer,
            Outcome::Push => self.push,
            Outcome::Blackjack => self.blackjack,
        }
    }

    /// Number of games recorded
    pub fn total(self) -> u64 {
        ALL_OUTCOMES.iter().map(|&o| self.count(o)).sum()
    }

    pub fn percentages(self) -> Result<Percentages, SimError> {
        let total = self.total();
        if total == 0 {
            return Err(SimError::NoGames);
        }
        let pct = |outcome| self.count(outcome) as f64 / total as f64 * 100.0;
        Ok(Percentages {
            player: pct(Outcome::Player),
            dealer: pct(Outcome::Dealer),
            push: pct(Outcome::Push),
            blackjack: pct(Outcome::Blackjack),
        })
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        for &outcome in ALL_OUTCOMES.iter() {
            self.inc_by(rhs.count(outcome), outcome);
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut new = self;
        new += other;
        new
    }
}

/// Share of games, in percent, that ended in each outcome
#[derive(Deserialize, Serialize, PartialEq, Copy, Clone, Debug)]
pub struct Percentages {
    pub player: f64,
    pub dealer: f64,
    pub push: f64,
    pub blackjack: f64,
}

impl Percentages {
    pub fn get(self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Player => self.player,
            Outcome::Dealer => self.dealer,
            Outcome::Push => self.push,
            Outcome::Blackjack => self.blackjack,
        }
    }

    pub fn house_edge(self) -> f64 {
        self.dealer - self.player
    }
}

/// A finished batch: the raw counts plus the percentages derived from them
#[derive(Deserialize, Serialize, PartialEq, Copy, Clone, Debug)]
pub struct SimulationResults {
    pub tally: Tally,
    pub pct: Percentages,
}

impl SimulationResults {
    pub fn from_tally(tally: Tally) -> Result<Self, SimError> {
        Ok(Self {
            tally,
            pct: tally.percentages()?,
        })
    }

    pub fn games(&self) -> u64 {
        self.tally.total()
    }

    pub fn house_edge(&self) -> f64 {
        self.pct.house_edge()
    }
}
