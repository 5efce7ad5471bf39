//! Quantity type - a value with an associated unit

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{Measurable, MeasureError};

/// Tolerance used by quantity equality, in base units
pub const EQUALITY_EPSILON: f64 = 1e-6;

/// Above this magnitude an `f64` has no fractional hundredths left to round
const ROUNDING_LIMIT: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round to 2 decimal places, halves rounded up (toward positive infinity)
pub fn round2(value: f64) -> f64 {
    if value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0 + 0.5).floor() / 100.0
}

fn ensure_finite(value: f64) -> Result<f64, MeasureError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasureError::non_finite(value))
    }
}

/// The closed set of arithmetic operations on quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Divide,
}

impl ArithmeticOp {
    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Subtract => "subtract",
            ArithmeticOp::Divide => "divide",
        }
    }

    /// Apply the operation to two base-unit magnitudes
    pub fn compute(&self, left_base: f64, right_base: f64) -> Result<f64, MeasureError> {
        match self {
            ArithmeticOp::Add => Ok(left_base + right_base),
            ArithmeticOp::Subtract => Ok(left_base - right_base),
            ArithmeticOp::Divide => {
                if right_base == 0.0 {
                    return Err(MeasureError::DivisionByZero);
                }
                Ok(left_base / right_base)
            }
        }
    }
}

/// An immutable measured magnitude: a finite value in a unit of category `U`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "RawQuantity<U>",
    bound(serialize = "U: Serialize", deserialize = "U: Deserialize<'de>")
)]
pub struct Quantity<U: Measurable> {
    value: f64,
    unit: U,
}

/// Unvalidated wire form of a quantity
#[derive(Deserialize)]
struct RawQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: Measurable> TryFrom<RawQuantity<U>> for Quantity<U> {
    type Error = MeasureError;

    fn try_from(raw: RawQuantity<U>) -> Result<Self, Self::Error> {
        Quantity::new(raw.value, raw.unit)
    }
}

impl<U: Measurable> Quantity<U> {
    /// Create a new quantity; the value must be finite
    pub fn new(value: f64, unit: U) -> Result<Self, MeasureError> {
        let value = ensure_finite(value)?;
        Ok(Quantity { value, unit })
    }

    /// The numeric value, expressed in [`Self::unit`]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Unrounded magnitude in the category base unit
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Whether both quantities are within `tolerance` of each other in base units
    pub fn is_close(&self, other: &Quantity<U>, tolerance: f64) -> bool {
        (self.base_value() - other.base_value()).abs() <= tolerance
    }

    /// Convert to another unit of the same category, rounded to 2 decimals
    pub fn convert_to(&self, target: U) -> Result<Quantity<U>, MeasureError> {
        Self::from_base_in(self.base_value(), target)
    }

    /// Add `other`, expressing the result in this quantity's unit
    pub fn add(&self, other: &Quantity<U>) -> Result<Quantity<U>, MeasureError> {
        self.add_in(other, self.unit)
    }

    /// Add `other`, expressing the result in `target`
    pub fn add_in(&self, other: &Quantity<U>, target: U) -> Result<Quantity<U>, MeasureError> {
        let base = self.perform_base_arithmetic(other, target, ArithmeticOp::Add)?;
        Self::from_base_in(base, target)
    }

    /// Subtract `other`, expressing the result in this quantity's unit
    pub fn subtract(&self, other: &Quantity<U>) -> Result<Quantity<U>, MeasureError> {
        self.subtract_in(other, self.unit)
    }

    /// Subtract `other`, expressing the result in `target`
    pub fn subtract_in(&self, other: &Quantity<U>, target: U) -> Result<Quantity<U>, MeasureError> {
        let base = self.perform_base_arithmetic(other, target, ArithmeticOp::Subtract)?;
        Self::from_base_in(base, target)
    }

    /// Dimensionless ratio of the two base magnitudes (not rounded)
    pub fn divide(&self, other: &Quantity<U>) -> Result<f64, MeasureError> {
        self.perform_base_arithmetic(other, self.unit, ArithmeticOp::Divide)
    }

    /// Sum two quantities into `target`
    pub fn sum(a: &Quantity<U>, b: &Quantity<U>, target: U) -> Result<Quantity<U>, MeasureError> {
        a.add_in(b, target)
    }

    /// Sum two raw (value, unit) pairs into `target`
    pub fn sum_raw(
        first_value: f64,
        first_unit: U,
        second_value: f64,
        second_unit: U,
        target: U,
    ) -> Result<Quantity<U>, MeasureError> {
        let first = Quantity::new(first_value, first_unit)?;
        let second = Quantity::new(second_value, second_unit)?;
        Self::sum(&first, &second, target)
    }

    /// Shared validation for every arithmetic entry point
    fn validate_operands(
        &self,
        other: &Quantity<U>,
        target: U,
        op: ArithmeticOp,
    ) -> Result<(), MeasureError> {
        ensure_finite(self.value)?;
        ensure_finite(other.value)?;
        for unit in [self.unit, other.unit, target] {
            unit.validate_operation_support(op.name())?;
        }
        Ok(())
    }

    fn perform_base_arithmetic(
        &self,
        other: &Quantity<U>,
        target: U,
        op: ArithmeticOp,
    ) -> Result<f64, MeasureError> {
        self.validate_operands(other, target, op)?;
        op.compute(self.base_value(), other.base_value())
    }

    /// The only place a result is rounded
    fn from_base_in(base_value: f64, target: U) -> Result<Quantity<U>, MeasureError> {
        Quantity::new(round2(target.from_base(base_value)), target)
    }
}

impl<U: Measurable> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.is_close(other, EQUALITY_EPSILON)
    }
}

impl<U: Measurable> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.name())
    }
}
