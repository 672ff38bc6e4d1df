//! Monte Carlo estimate of how often a simplified game of Blackjack ends in a player win, a
//! dealer win, a push, or a player natural.
//!
//! Both sides follow the same fixed policy (draw below 17, stand on 17 or more) against an
//! infinite deck. Batches of games are tallied into counts and percentages, which can be printed
//! as a text report or drawn as a bar chart.
use tracing_subscriber::EnvFilter;

pub mod chart;
pub mod deck;
pub mod game;
pub mod hand;
pub mod report;
pub mod sim;
pub mod tally;

/// Log to stderr, filtered by RUST_LOG (default "info"), leaving stdout for the report
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// One line for stderr when a binary gives up: the error's message followed by its sources
pub fn error_message(err: &dyn std::error::Error) -> String {
    let mut msg = format!("error: {}", err);
    let mut source = err.source();
    while let Some(e) = source {
        msg.push_str(&format!(": {}", e));
        source = e.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::error_message;
    use crate::chart::ChartError;
    use crate::sim::SimError;
    use std::error::Error;
    use std::io;

    #[test]
    fn message_not_debug() {
        // what a failed run prints is the readable text, not the variant name
        let e: Box<dyn Error> = Box::new(SimError::NoGames);
        assert_eq!(
            error_message(e.as_ref()),
            "error: at least one game must be simulated"
        );
        let e: Box<dyn Error> = Box::new(ChartError::UnsupportedFormat("out.gif".into()));
        assert_eq!(
            error_message(e.as_ref()),
            "error: unsupported chart format for out.gif (use .png or .svg)"
        );
    }

    #[test]
    fn message_includes_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("could not write chart")]
        struct Wrapper(#[source] io::Error);
        let e = Wrapper(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(error_message(&e), "error: could not write chart: disk full");
    }
}
