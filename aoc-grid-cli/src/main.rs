//! aoc-grid - run the grid search engines on puzzle input

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` applies only when no `-v` is given
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let runner = Runner::new(config.thread_count)?;
    let report = runner.execute(&config)?;

    OutputFormatter::new(config.quiet).print_report(&report);
    Ok(())
}
