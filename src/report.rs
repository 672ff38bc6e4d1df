use crate::game::Outcome;
use crate::tally::SimulationResults;
use std::io::{self, Write};

/// Printed before the first batch starts
pub fn write_header(mut fd: impl Write) -> io::Result<()> {
    writeln!(fd, "Blackjack simulation")
}

/// Write the results block: game count, one line per outcome and the house edge.
pub fn write_report(mut fd: impl Write, results: &SimulationResults) -> io::Result<()> {
    writeln!(fd, "--==-- SIMULATION RESULTS --==--")?;
    writeln!(fd, "Games simulated: {}", results.games())?;
    for (outcome, label) in &[
        (Outcome::Player, "Player wins"),
        (Outcome::Dealer, "Dealer wins"),
        (Outcome::Push, "Pushes"),
        (Outcome::Blackjack, "Player Blackjacks"),
    ] {
        writeln!(
            fd,
            "{}: {} ({:.1}%)",
            label,
            results.tally.count(*outcome),
            results.pct.get(*outcome)
        )?;
    }
    writeln!(fd, "House edge: {:.1}%", results.house_edge())
}

#[cfg(test)]
mod tests {
    use super::{write_header, write_report};
    use crate::game::Outcome;
    use crate::tally::{SimulationResults, Tally};

    fn results() -> SimulationResults {
        let mut t = Tally::new();
        t.inc_by(4200, Outcome::Player);
        t.inc_by(4800, Outcome::Dealer);
        t.inc_by(550, Outcome::Push);
        t.inc_by(450, Outcome::Blackjack);
        SimulationResults::from_tally(t).unwrap()
    }

    #[test]
    fn header() {
        let mut buf = vec![];
        write_header(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Blackjack simulation\n");
    }

    #[test]
    fn report_lines() {
        let mut buf = vec![];
        write_report(&mut buf, &results()).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(
            lines,
            vec![
                "--==-- SIMULATION RESULTS --==--",
                "Games simulated: 10000",
                "Player wins: 4200 (42.0%)",
                "Dealer wins: 4800 (48.0%)",
                "Pushes: 550 (5.5%)",
                "Player Blackjacks: 450 (4.5%)",
                "House edge: 6.0%",
            ]
        );
    }

    #[test]
    fn negative_edge_formatting() {
        let mut t = Tally::new();
        t.inc_by(3, Outcome::Player);
        t.inc_by(1, Outcome::Dealer);
        let mut buf = vec![];
        write_report(&mut buf, &SimulationResults::from_tally(t).unwrap()).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.ends_with("House edge: -50.0%\n"));
    }
}
