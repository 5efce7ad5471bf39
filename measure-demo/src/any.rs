//! Runtime-tagged quantities for input whose category is only known after parsing
//!
//! The typed engine rejects cross-category mixing at compile time. Here the
//! category is a runtime tag, so mismatches are checked explicitly: equality
//! answers `false`, everything else fails with `IncompatibleCategory`.

use std::fmt;
use std::str::FromStr;
use measure_core::{Measurable, MeasureError, Quantity};
use measure_units::{
    Length, LengthUnit, Temperature, TemperatureUnit, Volume, VolumeUnit, Weight, WeightUnit,
};

/// A unit from any of the known categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyUnit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
}

/// A quantity from any of the known categories
#[derive(Debug, Clone, Copy)]
pub enum AnyQuantity {
    Length(Length),
    Weight(Weight),
    Volume(Volume),
    Temperature(Temperature),
}

/// Bridges a typed category and its runtime tag
pub trait Category: Measurable + FromStr<Err = MeasureError> {
    fn wrap_unit(self) -> AnyUnit;
    fn extract_unit(unit: AnyUnit) -> Option<Self>;
    fn wrap(quantity: Quantity<Self>) -> AnyQuantity;
    fn extract(quantity: &AnyQuantity) -> Option<Quantity<Self>>;
}

macro_rules! impl_category {
    ($unit:ty, $variant:ident) => {
        impl Category for $unit {
            fn wrap_unit(self) -> AnyUnit {
                AnyUnit::$variant(self)
            }

            fn extract_unit(unit: AnyUnit) -> Option<Self> {
                match unit {
                    AnyUnit::$variant(u) => Some(u),
                    _ => None,
                }
            }

            fn wrap(quantity: Quantity<Self>) -> AnyQuantity {
                AnyQuantity::$variant(quantity)
            }

            fn extract(quantity: &AnyQuantity) -> Option<Quantity<Self>> {
                match quantity {
                    AnyQuantity::$variant(q) => Some(*q),
                    _ => None,
                }
            }
        }
    };
}

impl_category!(LengthUnit, Length);
impl_category!(WeightUnit, Weight);
impl_category!(VolumeUnit, Volume);
impl_category!(TemperatureUnit, Temperature);

/// Expand `$body` once per category with `$q` bound to the typed value
macro_rules! each_category {
    ($value:expr, $kind:ident, $q:ident => $body:expr) => {
        match $value {
            $kind::Length($q) => $body,
            $kind::Weight($q) => $body,
            $kind::Volume($q) => $body,
            $kind::Temperature($q) => $body,
        }
    };
}

fn incompatible(left: &'static str, right: &'static str) -> MeasureError {
    MeasureError::IncompatibleCategory { left, right }
}

fn try_parse<U: Category>(s: &str) -> Option<AnyUnit> {
    s.parse::<U>().ok().map(U::wrap_unit)
}

impl AnyUnit {
    pub fn category(&self) -> &'static str {
        fn tag<U: Measurable>(_: U) -> &'static str {
            U::CATEGORY
        }
        each_category!(*self, AnyUnit, u => tag(u))
    }

    pub fn name(&self) -> &'static str {
        each_category!(*self, AnyUnit, u => u.name())
    }
}

impl FromStr for AnyUnit {
    type Err = MeasureError;

    /// Categories are tried in order: length, weight, volume, temperature
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse::<LengthUnit>(s)
            .or_else(|| try_parse::<WeightUnit>(s))
            .or_else(|| try_parse::<VolumeUnit>(s))
            .or_else(|| try_parse::<TemperatureUnit>(s))
            .ok_or_else(|| MeasureError::invalid_argument(format!("unknown unit: {}", s.trim())))
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn new_typed<U: Category>(value: f64, unit: U) -> Result<AnyQuantity, MeasureError> {
    Quantity::new(value, unit).map(U::wrap)
}

/// Run a typed operation once `other` and `target` are known to share `U`'s category
fn combine<U, F>(
    first: Quantity<U>,
    other: &AnyQuantity,
    target: AnyUnit,
    op: F,
) -> Result<AnyQuantity, MeasureError>
where
    U: Category,
    F: FnOnce(&Quantity<U>, &Quantity<U>, U) -> Result<Quantity<U>, MeasureError>,
{
    let second = U::extract(other).ok_or_else(|| incompatible(U::CATEGORY, other.category()))?;
    let target = U::extract_unit(target).ok_or_else(|| incompatible(U::CATEGORY, target.category()))?;
    op(&first, &second, target).map(U::wrap)
}

fn convert_typed<U: Category>(quantity: Quantity<U>, target: AnyUnit) -> Result<AnyQuantity, MeasureError> {
    let target = U::extract_unit(target).ok_or_else(|| incompatible(U::CATEGORY, target.category()))?;
    quantity.convert_to(target).map(U::wrap)
}

fn divide_typed<U: Category>(first: Quantity<U>, other: &AnyQuantity) -> Result<f64, MeasureError> {
    let second = U::extract(other).ok_or_else(|| incompatible(U::CATEGORY, other.category()))?;
    first.divide(&second)
}

fn equals_typed<U: Category>(first: Quantity<U>, other: &AnyQuantity) -> bool {
    U::extract(other).is_some_and(|second| first == second)
}

impl AnyQuantity {
    pub fn new(value: f64, unit: AnyUnit) -> Result<Self, MeasureError> {
        each_category!(unit, AnyUnit, u => new_typed(value, u))
    }

    pub fn value(&self) -> f64 {
        each_category!(self, AnyQuantity, q => q.value())
    }

    pub fn unit(&self) -> AnyUnit {
        each_category!(self, AnyQuantity, q => q.unit().wrap_unit())
    }

    pub fn category(&self) -> &'static str {
        self.unit().category()
    }

    /// Same-category equality; a category mismatch is simply unequal
    pub fn equals(&self, other: &AnyQuantity) -> bool {
        each_category!(*self, AnyQuantity, q => equals_typed(q, other))
    }

    pub fn convert_to(&self, target: AnyUnit) -> Result<AnyQuantity, MeasureError> {
        each_category!(*self, AnyQuantity, q => convert_typed(q, target))
    }

    /// Add, defaulting the result unit to this quantity's unit
    pub fn add(&self, other: &AnyQuantity, target: Option<AnyUnit>) -> Result<AnyQuantity, MeasureError> {
        let target = target.unwrap_or_else(|| self.unit());
        each_category!(*self, AnyQuantity, q => combine(q, other, target, |a, b, t| a.add_in(b, t)))
    }

    /// Subtract, defaulting the result unit to this quantity's unit
    pub fn subtract(&self, other: &AnyQuantity, target: Option<AnyUnit>) -> Result<AnyQuantity, MeasureError> {
        let target = target.unwrap_or_else(|| self.unit());
        each_category!(*self, AnyQuantity, q => combine(q, other, target, |a, b, t| a.subtract_in(b, t)))
    }

    pub fn divide(&self, other: &AnyQuantity) -> Result<f64, MeasureError> {
        each_category!(*self, AnyQuantity, q => divide_typed(q, other))
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_category!(self, AnyQuantity, q => write!(f, "{}", q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(value: f64, unit: &str) -> AnyQuantity {
        AnyQuantity::new(value, unit.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_parse_units_across_categories() {
        assert_eq!("FEET".parse::<AnyUnit>().unwrap(), AnyUnit::Length(LengthUnit::Feet));
        assert_eq!("kg".parse::<AnyUnit>().unwrap(), AnyUnit::Weight(WeightUnit::Kilogram));
        assert_eq!("gal".parse::<AnyUnit>().unwrap(), AnyUnit::Volume(VolumeUnit::Gallon));
        assert_eq!("F".parse::<AnyUnit>().unwrap(), AnyUnit::Temperature(TemperatureUnit::Fahrenheit));
        let err = "parsec".parse::<AnyUnit>().unwrap_err();
        assert_eq!(err, MeasureError::InvalidArgument("unknown unit: parsec".to_string()));
    }

    #[test]
    fn test_unit_category() {
        assert_eq!(AnyUnit::Volume(VolumeUnit::Liter).category(), "volume");
        assert_eq!(AnyUnit::Temperature(TemperatureUnit::Celsius).name(), "CELSIUS");
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let unit = AnyUnit::Length(LengthUnit::Feet);
        assert!(matches!(AnyQuantity::new(f64::NAN, unit), Err(MeasureError::InvalidArgument(_))));
    }

    #[test]
    fn test_equals_same_category() {
        assert!(q(1.0, "FEET").equals(&q(12.0, "INCHES")));
        assert!(!q(1.0, "FEET").equals(&q(13.0, "INCHES")));
    }

    #[test]
    fn test_equals_cross_category_is_false() {
        assert!(!q(1.0, "FEET").equals(&q(1.0, "KILOGRAM")));
        assert!(!q(1.0, "LITER").equals(&q(1.0, "KILOGRAM")));
        assert!(!q(0.0, "CELSIUS").equals(&q(0.0, "FEET")));
    }

    #[test]
    fn test_add_default_and_explicit_target() {
        let sum = q(1.0, "FEET").add(&q(12.0, "INCHES"), None).unwrap();
        assert_eq!(sum.to_string(), "2.00 FEET");

        let sum = q(1.0, "FEET").add(&q(12.0, "INCHES"), Some("INCHES".parse().unwrap())).unwrap();
        assert_eq!(sum.to_string(), "24.00 INCHES");
    }

    #[test]
    fn test_cross_category_arithmetic_fails() {
        let err = q(1.0, "FEET").add(&q(1.0, "KILOGRAM"), None).unwrap_err();
        assert_eq!(err, MeasureError::IncompatibleCategory { left: "length", right: "weight" });

        let err = q(1.0, "FEET").subtract(&q(1.0, "INCHES"), Some("GRAM".parse().unwrap())).unwrap_err();
        assert_eq!(err, MeasureError::IncompatibleCategory { left: "length", right: "weight" });

        let err = q(1.0, "LITER").divide(&q(1.0, "FEET")).unwrap_err();
        assert_eq!(err, MeasureError::IncompatibleCategory { left: "volume", right: "length" });

        let err = q(1.0, "LITER").convert_to("CELSIUS".parse().unwrap()).unwrap_err();
        assert_eq!(err, MeasureError::IncompatibleCategory { left: "volume", right: "temperature" });
    }

    #[test]
    fn test_temperature_arithmetic_rejected() {
        let err = q(1.0, "CELSIUS").add(&q(1.0, "CELSIUS"), None).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_OPERATION");
    }

    #[test]
    fn test_subtract_and_divide() {
        let diff = q(10.0, "KILOGRAM").subtract(&q(5000.0, "GRAM"), Some("GRAM".parse().unwrap())).unwrap();
        assert_eq!(diff.value(), 5000.0);
        assert_eq!(diff.unit(), AnyUnit::Weight(WeightUnit::Gram));

        assert_eq!(q(5.0, "FEET").divide(&q(0.0, "INCHES")).unwrap_err(), MeasureError::DivisionByZero);
    }

    #[test]
    fn test_convert() {
        let c = q(212.0, "FAHRENHEIT").convert_to("CELSIUS".parse().unwrap()).unwrap();
        assert_eq!(c.to_string(), "100.00 CELSIUS");
        assert_eq!(c.category(), "temperature");
    }
}
