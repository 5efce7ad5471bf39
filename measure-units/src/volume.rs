//! Volume units (base unit: LITER)

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use measure_core::{ConversionLaw, Measurable, MeasureError, Quantity};

pub type Volume = Quantity<VolumeUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    Gallon,
}

impl VolumeUnit {
    /// Size of one of this unit in liters (US gallon)
    pub fn conversion_factor(&self) -> f64 {
        match self {
            VolumeUnit::Liter => 1.0,
            VolumeUnit::Milliliter => 0.001,
            VolumeUnit::Gallon => 3.78541,
        }
    }
}

impl Measurable for VolumeUnit {
    const CATEGORY: &'static str = "volume";

    fn law(&self) -> ConversionLaw {
        ConversionLaw::linear(self.conversion_factor())
    }

    fn name(&self) -> &'static str {
        match self {
            VolumeUnit::Liter => "LITER",
            VolumeUnit::Milliliter => "MILLILITER",
            VolumeUnit::Gallon => "GALLON",
        }
    }

    fn all() -> &'static [Self] {
        &[VolumeUnit::Liter, VolumeUnit::Milliliter, VolumeUnit::Gallon]
    }

    fn base_unit() -> Self {
        VolumeUnit::Liter
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VolumeUnit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liter" | "liters" | "litre" | "litres" | "l" => Ok(VolumeUnit::Liter),
            "milliliter" | "milliliters" | "millilitre" | "millilitres" | "ml" => Ok(VolumeUnit::Milliliter),
            "gallon" | "gallons" | "gal" => Ok(VolumeUnit::Gallon),
            _ => Err(MeasureError::unknown_unit(Self::CATEGORY, s)),
        }
    }
}
