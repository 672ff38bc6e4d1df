use crate::deck::CardSource;
use crate::game::play_game;
use crate::tally::{SimulationResults, Tally};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_NUM_GAMES: u64 = 10_000;
const PROGRESS_INTERVAL: u64 = 10_000;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("at least one game must be simulated")]
    NoGames,
}

/// Play `num_games` games from `source` and collect the results. Zero games is an error.
pub fn run_simulation<S>(num_games: u64, source: &mut S) -> Result<SimulationResults, SimError>
where
    S: CardSource + ?Sized,
{
    run_simulation_with_progress(num_games, source, |_done, _total| {})
}

/// Like run_simulation(), but calls `progress_cb(done, total)` every so often and once more when
/// the batch is complete.
pub fn run_simulation_with_progress<S, F>(
    num_games: u64,
    source: &mut S,
    mut progress_cb: F,
) -> Result<SimulationResults, SimError>
where
    S: CardSource + ?Sized,
    F: FnMut(u64, u64),
{
    if num_games == 0 {
        return Err(SimError::NoGames);
    }
    debug!(num_games, "starting batch");
    let mut tally = Tally::new();
    for game in 0..num_games {
        tally.inc(play_game(source));
        let done = game + 1;
        if done % PROGRESS_INTERVAL == 0 || done == num_games {
            debug!(done, num_games, "batch progress");
            progress_cb(done, num_games);
        }
    }
    let results = SimulationResults::from_tally(tally)?;
    info!(
        games = results.games(),
        house_edge = results.house_edge(),
        "batch complete"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{run_simulation, run_simulation_with_progress, SimError, DEFAULT_NUM_GAMES};
    use crate::deck::InfiniteDeck;
    use crate::game::tests::Stacked;
    use crate::game::{Outcome, ALL_OUTCOMES};
    const EPSILON: f64 = 1e-9;

    #[test]
    fn zero_games_rejected() {
        let mut deck = InfiniteDeck::seeded(1);
        assert_eq!(run_simulation(0, &mut deck), Err(SimError::NoGames));
    }

    #[test]
    fn total_matches_request() {
        let mut deck = InfiniteDeck::seeded(2);
        for &n in &[1, 7, 100, 2_500] {
            let r = run_simulation(n, &mut deck).unwrap();
            assert_eq!(r.games(), n);
            let sum: u64 = ALL_OUTCOMES.iter().map(|&o| r.tally.count(o)).sum();
            assert_eq!(sum, n);
        }
    }

    #[test]
    fn percentages_sum_to_100() {
        let mut deck = InfiniteDeck::seeded(3);
        let r = run_simulation(DEFAULT_NUM_GAMES, &mut deck).unwrap();
        let sum: f64 = ALL_OUTCOMES.iter().map(|&o| r.pct.get(o)).sum();
        assert!((sum - 100.0).abs() < EPSILON);
    }

    #[test]
    fn dealer_has_the_edge() {
        // the player busting first gives the house a clear edge over a large batch
        let mut deck = InfiniteDeck::seeded(4);
        let r = run_simulation(50_000, &mut deck).unwrap();
        assert!(r.house_edge() > 0.0);
        assert!(r.pct.dealer > r.pct.player);
        assert!(r.pct.blackjack > 2.0 && r.pct.blackjack < 8.0);
    }

    #[test]
    fn same_seed_same_results() {
        let r1 = run_simulation(1_000, &mut InfiniteDeck::seeded(5)).unwrap();
        let r2 = run_simulation(1_000, &mut InfiniteDeck::seeded(5)).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn scripted_batch() {
        // three games back to back: player natural, dealer natural, push on 18
        let mut deck = Stacked::new(&[11, 10, 10, 9, 10, 9, 11, 10, 10, 8, 10, 8]);
        let r = run_simulation(3, &mut deck).unwrap();
        assert_eq!(r.tally.count(Outcome::Blackjack), 1);
        assert_eq!(r.tally.count(Outcome::Dealer), 1);
        assert_eq!(r.tally.count(Outcome::Push), 1);
        assert_eq!(r.tally.count(Outcome::Player), 0);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn progress_reported() {
        let mut deck = InfiniteDeck::seeded(6);
        let mut calls = vec![];
        run_simulation_with_progress(25_000, &mut deck, |done, total| calls.push((done, total)))
            .unwrap();
        assert_eq!(calls, vec![(10_000, 25_000), (20_000, 25_000), (25_000, 25_000)]);
    }
}
