//! The contract every unit of measurement implements

use std::fmt::Debug;
use crate::{ConversionLaw, MeasureError};

/// A unit belonging to one measurement category.
///
/// Implementors are closed enumerations: every unit of a category is a
/// variant, and exactly one variant (the base unit) has the identity law.
/// All cross-unit math in [`crate::Quantity`] goes through the base unit.
///
/// Contract law: `from_base(to_base(x)) == x` (within 1e-6) for every
/// finite `x`.
pub trait Measurable: Copy + PartialEq + Debug + 'static {
    /// Category tag, e.g. `"length"`
    const CATEGORY: &'static str;

    /// Conversion law to the category base unit
    fn law(&self) -> ConversionLaw;

    /// Display name, e.g. `"FEET"`
    fn name(&self) -> &'static str;

    /// Every unit of the category, in declaration order
    fn all() -> &'static [Self];

    /// The unit whose law is the identity
    fn base_unit() -> Self;

    /// Convert a magnitude in this unit to the base unit
    fn to_base(&self, value: f64) -> f64 {
        self.law().to_base(value)
    }

    /// Convert a base-unit magnitude to this unit
    fn from_base(&self, base_value: f64) -> f64 {
        self.law().from_base(base_value)
    }

    /// Whether add, subtract and divide make sense for this unit kind
    fn supports_arithmetic(&self) -> bool {
        true
    }

    /// Fail with `UnsupportedOperation` if arithmetic is disallowed
    fn validate_operation_support(&self, operation: &'static str) -> Result<(), MeasureError> {
        if self.supports_arithmetic() {
            Ok(())
        } else {
            Err(MeasureError::UnsupportedOperation {
                operation,
                category: Self::CATEGORY,
            })
        }
    }
}
