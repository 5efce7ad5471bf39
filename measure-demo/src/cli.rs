//! Command-line and environment configuration

use std::env;
use clap::{Parser, ValueEnum};
use crate::command::Command;

/// Log filter used when neither MEASURE_LOG nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info";

const UNITS_HELP: &str = "\
Units: FEET INCHES YARDS CENTIMETERS KILOGRAM GRAM POUND
       LITER MILLILITER GALLON CELSIUS FAHRENHEIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Quantity measurement demo
#[derive(Parser, Debug)]
#[command(name = "measure-demo", version, long_about = None)]
#[command(about = "Quantity measurement demo; runs the built-in showcase when no command is given")]
#[command(after_help = UNITS_HELP)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, ignore_case = true, env = "MEASURE_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print results as JSON (same as --output json)
    #[arg(long, global = true, conflicts_with = "text")]
    pub json: bool,

    /// Print results as text (same as --output text)
    #[arg(long, global = true)]
    pub text: bool,

    /// Tracing filter, falls back to RUST_LOG
    #[arg(long, global = true, env = "MEASURE_LOG", value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.text {
            OutputFormat::Text
        } else {
            self.output
        }
    }

    pub fn log_filter(&self) -> String {
        resolve_log_filter(self.log.as_deref(), env::var("RUST_LOG").ok())
    }
}

fn resolve_log_filter(flag: Option<&str>, rust_log: Option<String>) -> String {
    flag.map(str::to_string)
        .or(rust_log)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
