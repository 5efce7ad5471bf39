//! Single-operation subcommands

use clap::{Args, Subcommand};
use tracing::debug;
use measure_core::MeasureError;
use measure_units::parse_value;
use crate::any::{AnyQuantity, AnyUnit};
use crate::outcome::{Answer, Outcome};

/// Two operands, each a value followed by a unit name
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    #[arg(value_parser = parse_value, value_name = "VALUE")]
    pub first: f64,
    #[arg(value_name = "UNIT")]
    pub first_unit: AnyUnit,
    #[arg(value_parser = parse_value, value_name = "VALUE")]
    pub second: f64,
    #[arg(value_name = "UNIT")]
    pub second_unit: AnyUnit,
}

impl Pair {
    fn quantities(&self) -> Result<(AnyQuantity, AnyQuantity), MeasureError> {
        Ok((
            AnyQuantity::new(self.first, self.first_unit)?,
            AnyQuantity::new(self.second, self.second_unit)?,
        ))
    }
}

/// Two operands and an optional result unit
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct Targeted {
    #[command(flatten)]
    pub pair: Pair,
    /// Result unit, defaults to the first operand's unit
    #[arg(value_name = "TARGET")]
    pub target: Option<AnyUnit>,
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    #[arg(value_parser = parse_value, value_name = "VALUE")]
    pub value: f64,
    #[arg(value_name = "UNIT")]
    pub unit: AnyUnit,
    #[arg(value_name = "TARGET")]
    pub target: AnyUnit,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Compare two quantities; different categories are never equal
    #[command(visible_alias = "eq", allow_negative_numbers = true)]
    Equals(Pair),
    /// Convert a quantity to another unit of its category
    #[command(allow_negative_numbers = true)]
    Convert(Conversion),
    /// Add two quantities
    #[command(allow_negative_numbers = true)]
    Add(Targeted),
    /// Subtract the second quantity from the first
    #[command(visible_alias = "sub", allow_negative_numbers = true)]
    Subtract(Targeted),
    /// Divide two quantities, giving a plain ratio
    #[command(visible_alias = "div", allow_negative_numbers = true)]
    Divide(Pair),
}

fn describe_pair(op: &str, pair: &Pair) -> String {
    format!("{} {} {} {} {}", op, pair.first, pair.first_unit, pair.second, pair.second_unit)
}

fn describe_targeted(op: &str, args: &Targeted) -> String {
    match args.target {
        Some(target) => format!("{} {}", describe_pair(op, &args.pair), target),
        None => describe_pair(op, &args.pair),
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Equals(_) => "equals",
            Command::Convert(_) => "convert",
            Command::Add(_) => "add",
            Command::Subtract(_) => "subtract",
            Command::Divide(_) => "divide",
        }
    }

    /// The command as it would be typed, with canonical unit names
    pub fn label(&self) -> String {
        match self {
            Command::Equals(pair) | Command::Divide(pair) => describe_pair(self.name(), pair),
            Command::Convert(c) => format!("{} {} {} {}", self.name(), c.value, c.unit, c.target),
            Command::Add(args) | Command::Subtract(args) => describe_targeted(self.name(), args),
        }
    }

    pub fn evaluate(&self) -> Result<Answer, MeasureError> {
        match self {
            Command::Equals(pair) => {
                let (a, b) = pair.quantities()?;
                Ok(Answer::Bool(a.equals(&b)))
            }
            Command::Convert(c) => AnyQuantity::new(c.value, c.unit)?.convert_to(c.target).map(Answer::from),
            Command::Add(args) => {
                let (a, b) = args.pair.quantities()?;
                a.add(&b, args.target).map(Answer::from)
            }
            Command::Subtract(args) => {
                let (a, b) = args.pair.quantities()?;
                a.subtract(&b, args.target).map(Answer::from)
            }
            Command::Divide(pair) => {
                let (a, b) = pair.quantities()?;
                a.divide(&b).map(Answer::Ratio)
            }
        }
    }
}

/// Evaluate one command; failures become the outcome's error
pub fn execute(command: &Command) -> Outcome {
    debug!(operation = command.name(), "executing command");
    Outcome::new(command.label(), command.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::Parser;
    use crate::cli::Cli;

    fn parse(s: &str) -> Result<Command, clap::Error> {
        let args = std::iter::once("measure-demo").chain(s.split_whitespace());
        Cli::try_parse_from(args).map(|cli| cli.command.unwrap())
    }

    fn run(s: &str) -> Outcome {
        execute(&parse(s).unwrap())
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(parse("eq 1 FEET 12 INCHES").unwrap(), Command::Equals(_)));
        assert!(matches!(parse("sub 1 FEET 12 INCHES").unwrap(), Command::Subtract(_)));
        assert!(matches!(parse("div 1 FEET 12 INCHES").unwrap(), Command::Divide(_)));
        assert!(parse("multiply 1 FEET 1 FEET").is_err());
    }

    #[test]
    fn test_equals() {
        let outcome = run("equals 1 FEET 12 INCHES");
        assert_eq!(outcome.result, Some(Answer::Bool(true)));
        assert_eq!(outcome.to_string(), "equals 1 FEET 12 INCHES: true");
    }

    #[test]
    fn test_equals_cross_category() {
        let outcome = run("equals 1 FEET 1 KILOGRAM");
        assert!(outcome.is_ok());
        assert_eq!(outcome.result, Some(Answer::Bool(false)));
    }

    #[test]
    fn test_convert() {
        let outcome = run("convert 1 yd in");
        assert_eq!(outcome.to_string(), "convert 1 YARDS INCHES: 36.00 INCHES");
    }

    #[test]
    fn test_convert_negative_value() {
        let outcome = run("convert -40 F C");
        assert_eq!(outcome.result.unwrap().to_string(), "-40.00 CELSIUS");
    }

    #[test]
    fn test_add_with_and_without_target() {
        assert_eq!(run("add 1 FEET 12 INCHES").result.unwrap().to_string(), "2.00 FEET");
        let outcome = run("add 1 FEET 12 INCHES YARDS");
        assert_eq!(outcome.operation, "add 1 FEET 12 INCHES YARDS");
        assert_eq!(outcome.result.unwrap().to_string(), "0.67 YARDS");
    }

    #[test]
    fn test_subtract() {
        let outcome = run("subtract 10 KILOGRAM 5000 GRAM GRAM");
        assert_eq!(outcome.result.unwrap().to_string(), "5000.00 GRAM");
    }

    #[test]
    fn test_divide() {
        assert_eq!(run("divide 1 YARDS 1 FEET").result, Some(Answer::Ratio(3.0)));
        let outcome = run("divide 5 FEET 0 FEET");
        assert_eq!(outcome.error.unwrap().code, "DIV_ZERO");
    }

    #[test]
    fn test_temperature_rejected() {
        let outcome = run("add 1 CELSIUS 1 CELSIUS");
        assert_eq!(outcome.error.unwrap().code, "UNSUPPORTED_OPERATION");
    }

    #[test]
    fn test_incompatible_categories() {
        assert_eq!(run("add 1 FEET 1 LITER").error.unwrap().code, "INCOMPATIBLE_CATEGORY");
        assert_eq!(run("convert 1 FEET GRAM").error.unwrap().code, "INCOMPATIBLE_CATEGORY");
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(parse("add 1 FEET").unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse("equals").unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(parse("convert abc FEET INCHES").unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse("convert NaN FEET INCHES").unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse("convert 1 FURLONG INCHES").unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse("divide 1 FEET 1 FEET FEET").unwrap_err().kind(), ErrorKind::UnknownArgument);
    }
}
