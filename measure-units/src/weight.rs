//! Weight units (base unit: KILOGRAM)

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use measure_core::{ConversionLaw, Measurable, MeasureError, Quantity};

pub type Weight = Quantity<WeightUnit>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
}

impl WeightUnit {
    /// Size of one of this unit in kilograms
    pub fn conversion_factor(&self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 0.001,
            WeightUnit::Pound => 0.453592,
        }
    }
}

impl Measurable for WeightUnit {
    const CATEGORY: &'static str = "weight";

    fn law(&self) -> ConversionLaw {
        ConversionLaw::linear(self.conversion_factor())
    }

    fn name(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "KILOGRAM",
            WeightUnit::Gram => "GRAM",
            WeightUnit::Pound => "POUND",
        }
    }

    fn all() -> &'static [Self] {
        &[WeightUnit::Kilogram, WeightUnit::Gram, WeightUnit::Pound]
    }

    fn base_unit() -> Self {
        WeightUnit::Kilogram
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightUnit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kilogram" | "kilograms" | "kg" => Ok(WeightUnit::Kilogram),
            "gram" | "grams" | "g" => Ok(WeightUnit::Gram),
            "pound" | "pounds" | "lb" | "lbs" => Ok(WeightUnit::Pound),
            _ => Err(MeasureError::unknown_unit(Self::CATEGORY, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(value: f64, unit: WeightUnit) -> Weight {
        Weight::new(value, unit).unwrap()
    }

    #[test]
    fn test_round_trip_every_unit() {
        for unit in WeightUnit::all() {
            for v in [-1.0, 0.0, 0.001, 2.20462, 1_000_000.0] {
                assert!((unit.from_base(unit.to_base(v)) - v).abs() <= 1e-6);
            }
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(w(1.0, WeightUnit::Kilogram), w(1000.0, WeightUnit::Gram));
        assert_eq!(w(1000.0, WeightUnit::Gram), w(1.0, WeightUnit::Kilogram));
        assert_eq!(w(0.0, WeightUnit::Kilogram), w(0.0, WeightUnit::Gram));
        assert_eq!(w(-1.0, WeightUnit::Kilogram), w(-1000.0, WeightUnit::Gram));
        assert_eq!(w(1000.0, WeightUnit::Kilogram), w(1_000_000.0, WeightUnit::Gram));
        assert_ne!(w(1.0, WeightUnit::Kilogram), w(2.0, WeightUnit::Kilogram));
    }

    #[test]
    fn test_transitive() {
        let a = w(1.0, WeightUnit::Kilogram);
        let b = w(1000.0, WeightUnit::Gram);
        let c = w(1.0, WeightUnit::Kilogram);
        assert!(a == b && b == c && a == c);
    }

    #[test]
    fn test_pound_conversion() {
        let kg = w(2.20462, WeightUnit::Pound).convert_to(WeightUnit::Kilogram).unwrap();
        assert_eq!(kg, w(1.0, WeightUnit::Kilogram));

        let lb = w(1.0, WeightUnit::Kilogram).convert_to(WeightUnit::Pound).unwrap();
        assert_eq!(lb.value(), 2.2);
    }

    #[test]
    fn test_subtract_in_grams() {
        let diff = w(10.0, WeightUnit::Kilogram)
            .subtract_in(&w(5000.0, WeightUnit::Gram), WeightUnit::Gram)
            .unwrap();
        assert_eq!(diff, w(5000.0, WeightUnit::Gram));
        assert_eq!(diff.unit(), WeightUnit::Gram);
    }

    #[test]
    fn test_add() {
        let sum = w(1.0, WeightUnit::Kilogram).add(&w(500.0, WeightUnit::Gram)).unwrap();
        assert_eq!(format!("{}", sum), "1.50 KILOGRAM");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pound);
        assert_eq!("Kilogram".parse::<WeightUnit>().unwrap(), WeightUnit::Kilogram);
        assert!("ounce".parse::<WeightUnit>().is_err());
    }
}
