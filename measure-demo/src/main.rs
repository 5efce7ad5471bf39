//! Measure demonstration CLI
//!
//! Drives the quantity engine through its public API and prints the results.
//!
//! Modes:
//! - no command: run the showcase scenarios for every category
//! - `<command> <args>...`: run one operation (equals, convert, add, subtract, divide)
//!
//! Configuration:
//! - MEASURE_OUTPUT: `text` (default) or `json`; `--output`, `--json` and `--text` override it
//! - MEASURE_LOG, then RUST_LOG: tracing filter (default `info`), logs go to stderr

mod any;
mod cli;
mod command;
mod outcome;
mod showcase;

use std::process::ExitCode;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat, DEFAULT_LOG_FILTER};
use crate::outcome::Outcome;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(outcome: &Outcome, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => println!("{}", outcome.to_json()),
    }
}

fn run_showcase(format: OutputFormat) -> ExitCode {
    match showcase::run_showcase() {
        Ok(outcomes) => {
            for outcome in &outcomes {
                print_outcome(outcome, format);
            }
            info!(scenarios = outcomes.len(), "showcase complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = e.code(), "showcase setup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit with status 2 from inside clap
    let cli = Cli::parse();
    let format = cli.output_format();

    init_tracing(&cli.log_filter());
    info!(version = VERSION, output = ?format, "measure-demo started");

    let Some(command) = &cli.command else {
        return run_showcase(format);
    };

    let outcome = command::execute(command);
    print_outcome(&outcome, format);

    if outcome.is_ok() {
        debug!(operation = %outcome.operation, "command succeeded");
        ExitCode::SUCCESS
    } else {
        warn!(operation = %outcome.operation, "command failed");
        ExitCode::FAILURE
    }
}
