//! Measure Core - Category-safe quantities
//!
//! This crate provides the reusable engine:
//! - `Measurable`: the contract every unit of a category implements
//! - `ConversionLaw`: linear or affine mapping to the category base unit
//! - `Quantity<U>`: an immutable value paired with a unit of category `U`
//! - `MeasureError`: structured errors for every failing operation
//!
//! Categories are type parameters, so comparing or adding quantities of two
//! different categories does not compile. Concrete categories live in
//! `measure-units`.

mod error;
mod law;
mod measurable;
mod quantity;

pub use error::{MeasureError, ErrorReport, codes};
pub use law::ConversionLaw;
pub use measurable::Measurable;
pub use quantity::{Quantity, ArithmeticOp, round2, EQUALITY_EPSILON};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Measurable, MeasureError, Quantity};
}
