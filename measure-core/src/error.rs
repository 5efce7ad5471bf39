//! Structured errors for quantity operations
//!
//! Every failure is scoped to the single call that produced it. Errors are
//! values returned to the caller; nothing in the core logs or panics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INCOMPATIBLE_CATEGORY: &str = "INCOMPATIBLE_CATEGORY";
    pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
}

/// Error type for quantity construction, conversion and arithmetic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Incompatible categories: cannot combine {left} with {right}")]
    IncompatibleCategory {
        left: &'static str,
        right: &'static str,
    },

    #[error("Arithmetic operations ({operation}) are not supported for {category}")]
    UnsupportedOperation {
        operation: &'static str,
        category: &'static str,
    },

    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl MeasureError {
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        MeasureError::InvalidArgument(details.into())
    }

    /// Non-finite numeric input
    pub fn non_finite(value: f64) -> Self {
        MeasureError::InvalidArgument(format!("value must be finite, got {}", value))
    }

    /// Unit name that no category recognizes
    pub fn unknown_unit(category: &str, name: &str) -> Self {
        MeasureError::InvalidArgument(format!("unknown {} unit: {}", category, name))
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MeasureError::InvalidArgument(_) => codes::INVALID_ARGUMENT,
            MeasureError::IncompatibleCategory { .. } => codes::INCOMPATIBLE_CATEGORY,
            MeasureError::UnsupportedOperation { .. } => codes::UNSUPPORTED_OPERATION,
            MeasureError::DivisionByZero => codes::DIV_ZERO,
        }
    }

    /// Snapshot suitable for structured output
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Serializable form of a [`MeasureError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
