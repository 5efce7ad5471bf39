//! Temperature units
//!
//! Base unit is CELSIUS. Fahrenheit is an affine scale (offset + factor), so
//! it cannot be expressed as a single conversion factor. Adding, subtracting
//! or dividing two temperatures is rejected; only comparison and conversion
//! are meaningful.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use measure_core::{ConversionLaw, Measurable, MeasureError, Quantity};

pub type Temperature = Quantity<TemperatureUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

impl Measurable for TemperatureUnit {
    const CATEGORY: &'static str = "temperature";

    fn law(&self) -> ConversionLaw {
        match self {
            TemperatureUnit::Celsius => ConversionLaw::IDENTITY,
            TemperatureUnit::Fahrenheit => ConversionLaw::affine(fahrenheit_to_celsius, celsius_to_fahrenheit),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "CELSIUS",
            TemperatureUnit::Fahrenheit => "FAHRENHEIT",
        }
    }

    fn all() -> &'static [Self] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    fn base_unit() -> Self {
        TemperatureUnit::Celsius
    }

    fn supports_arithmetic(&self) -> bool {
        false
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(MeasureError::unknown_unit(Self::CATEGORY, s)),
        }
    }
}
