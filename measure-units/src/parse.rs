//! Quantity string parsing - "12 INCHES", "1.5 kg", "-40 F"

use std::str::FromStr;
use measure_core::{Measurable, MeasureError, Quantity};

/// Split a quantity string into its numeric value and unit text
///
/// The value comes first, the unit is everything after the first run of
/// whitespace. `"1e3 ft"` and `"-2.5 CENTIMETERS"` are both accepted.
pub fn split_quantity_string(s: &str) -> Result<(f64, &str), MeasureError> {
    let s = s.trim();
    let (number, unit) = s
        .split_once(char::is_whitespace)
        .ok_or_else(|| MeasureError::invalid_argument(format!("expected '<value> <unit>', got '{}'", s)))?;

    let value = parse_value(number)?;
    Ok((value, unit.trim()))
}

/// Parse a finite numeric value
pub fn parse_value(s: &str) -> Result<f64, MeasureError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| MeasureError::invalid_argument(format!("not a number: '{}'", s.trim())))?;
    if !value.is_finite() {
        return Err(MeasureError::non_finite(value));
    }
    Ok(value)
}

/// Parse a quantity string for a known category
pub fn parse_quantity<U>(s: &str) -> Result<Quantity<U>, MeasureError>
where
    U: Measurable + FromStr<Err = MeasureError>,
{
    let (value, unit) = split_quantity_string(s)?;
    Quantity::new(value, unit.parse()?)
}
