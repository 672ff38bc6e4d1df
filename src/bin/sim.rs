use blackjack_sim::chart::{
    ChartFormat, ChartRenderer, PlottersChartRenderer, DEFAULT_CHART_FILE,
};
use blackjack_sim::deck::InfiniteDeck;
use blackjack_sim::report::{write_header, write_report};
use blackjack_sim::sim::{run_simulation, DEFAULT_NUM_GAMES};
use clap::{crate_authors, crate_name, crate_version, value_t, App, Arg};
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// A fresh deck for each batch. With a seed, batch N uses seed + N so the batches stay
/// independent but the whole run is repeatable.
fn batch_deck(seed: Option<u64>, batch: u64) -> InfiniteDeck<StdRng> {
    match seed {
        Some(s) => InfiniteDeck::seeded(s.wrapping_add(batch)),
        None => InfiniteDeck::from_entropy(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let default_games = DEFAULT_NUM_GAMES.to_string();
    let matches = App::new(crate_name!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("games")
                .short("n")
                .long("num-games")
                .value_name("N")
                .help("Number of games to simulate in each batch")
                .default_value(&default_games),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("Seed the card draws so runs are repeatable"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the chart (.png or .svg)")
                .default_value(DEFAULT_CHART_FILE),
        )
        .arg(
            Arg::with_name("nochart")
                .long("no-chart")
                .help("Only print the report, skip the second batch and the chart"),
        )
        .get_matches();
    blackjack_sim::init_tracing();
    let num_games = value_t!(matches, "games", u64)?;
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64)?)
    } else {
        None
    };

    let output = Path::new(matches.value_of("output").unwrap_or(DEFAULT_CHART_FILE));
    let draw_chart = !matches.is_present("nochart");
    if draw_chart {
        ChartFormat::from_path(output)?;
    }

    let mut out = io::stdout();
    write_header(&mut out)?;
    out.flush()?;
    let results = run_simulation(num_games, &mut batch_deck(seed, 0))?;
    write_report(&mut out, &results)?;
    out.flush()?;

    if !draw_chart {
        return Ok(());
    }
    // the chart gets its own batch, so its numbers won't exactly match the report
    let results = run_simulation(num_games, &mut batch_deck(seed, 1))?;
    PlottersChartRenderer::default().render(output, &results)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", blackjack_sim::error_message(e.as_ref()));
        process::exit(1);
    }
}
