//! Length units
//!
//! Base unit is FEET. Every other unit is a fixed multiple of one foot.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use measure_core::{ConversionLaw, Measurable, MeasureError, Quantity};

/// A length measured in one of the [`LengthUnit`]s
pub type Length = Quantity<LengthUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Feet,
    Inches,
    Yards,
    Centimeters,
}

impl LengthUnit {
    /// Size of one of this unit in feet
    pub fn conversion_factor(&self) -> f64 {
        match self {
            LengthUnit::Feet => 1.0,
            LengthUnit::Inches => 1.0 / 12.0,
            LengthUnit::Yards => 3.0,
            LengthUnit::Centimeters => 1.0 / 30.48,
        }
    }
}

impl Measurable for LengthUnit {
    const CATEGORY: &'static str = "length";

    fn law(&self) -> ConversionLaw {
        ConversionLaw::linear(self.conversion_factor())
    }

    fn name(&self) -> &'static str {
        match self {
            LengthUnit::Feet => "FEET",
            LengthUnit::Inches => "INCHES",
            LengthUnit::Yards => "YARDS",
            LengthUnit::Centimeters => "CENTIMETERS",
        }
    }

    fn all() -> &'static [Self] {
        &[LengthUnit::Feet, LengthUnit::Inches, LengthUnit::Yards, LengthUnit::Centimeters]
    }

    fn base_unit() -> Self {
        LengthUnit::Feet
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = MeasureError;

    /// Accepts the display name or a common abbreviation, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(LengthUnit::Feet),
            "inches" | "inch" | "in" => Ok(LengthUnit::Inches),
            "yards" | "yard" | "yd" => Ok(LengthUnit::Yards),
            "centimeters" | "centimeter" | "centimetres" | "centimetre" | "cm" => Ok(LengthUnit::Centimeters),
            _ => Err(MeasureError::unknown_unit(Self::CATEGORY, s)),
        }
    }
}
