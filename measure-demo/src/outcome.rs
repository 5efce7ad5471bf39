//! Printable results of demonstration operations

use std::fmt;
use serde::Serialize;
use measure_core::{ErrorReport, Measurable, MeasureError, Quantity};
use crate::any::AnyQuantity;

/// Successful result of one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Quantity {
        value: f64,
        unit: &'static str,
        display: String,
    },
    Bool(bool),
    Ratio(f64),
}

impl Answer {
    pub fn quantity<U: Measurable>(q: &Quantity<U>) -> Self {
        Answer::Quantity {
            value: q.value(),
            unit: q.unit().name(),
            display: q.to_string(),
        }
    }
}

impl From<AnyQuantity> for Answer {
    fn from(q: AnyQuantity) -> Self {
        Answer::Quantity {
            value: q.value(),
            unit: q.unit().name(),
            display: q.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Quantity { display, .. } => f.write_str(display),
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::Ratio(r) => write!(f, "{}", r),
        }
    }
}

/// An operation label paired with its answer or error
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Outcome {
    pub fn new(operation: impl Into<String>, result: Result<Answer, MeasureError>) -> Self {
        let (result, error) = match result {
            Ok(answer) => (Some(answer), None),
            Err(e) => (None, Some(e.report())),
        };
        Outcome {
            operation: operation.into(),
            result,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// One line of JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| internal_error_json(&self.operation, &e.to_string()))
    }
}

fn internal_error_json(operation: &str, message: &str) -> String {
    serde_json::json!({
        "operation": operation,
        "error": { "code": "INTERNAL", "message": message },
    })
    .to_string()
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.result, &self.error) {
            (_, Some(error)) => write!(f, "{}: error {}", self.operation, error),
            (Some(answer), None) => write!(f, "{}: {}", self.operation, answer),
            (None, None) => write!(f, "{}: (no result)", self.operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_units::{Length, LengthUnit};

    #[test]
    fn test_quantity_answer() {
        let q = Length::new(2.0, LengthUnit::Feet).unwrap();
        let outcome = Outcome::new("1 FEET + 12 INCHES", Ok(Answer::quantity(&q)));
        assert!(outcome.is_ok());
        assert_eq!(outcome.to_string(), "1 FEET + 12 INCHES: 2.00 FEET");

        let json: serde_json::Value = serde_json::from_str(&outcome.to_json()).unwrap();
        assert_eq!(json["result"]["value"], 2.0);
        assert_eq!(json["result"]["unit"], "FEET");
        assert_eq!(json["result"]["display"], "2.00 FEET");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_bool_and_ratio_answers() {
        let json = serde_json::to_value(Outcome::new("eq", Ok(Answer::Bool(false)))).unwrap();
        assert_eq!(json, serde_json::json!({"operation": "eq", "result": false}));

        let outcome = Outcome::new("ratio", Ok(Answer::Ratio(1.5)));
        assert_eq!(outcome.to_string(), "ratio: 1.5");
    }

    #[test]
    fn test_error_outcome() {
        let outcome = Outcome::new("5 FEET / 0 FEET", Err(MeasureError::DivisionByZero));
        assert!(!outcome.is_ok());
        assert_eq!(outcome.to_string(), "5 FEET / 0 FEET: error [DIV_ZERO] Cannot divide by zero");

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["error"]["code"], "DIV_ZERO");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_internal_error_json_escapes_label() {
        let line = internal_error_json(r#"say "hi""#, "bad\nthing");
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["operation"], r#"say "hi""#);
        assert_eq!(json["error"]["code"], "INTERNAL");
        assert_eq!(json["error"]["message"], "bad\nthing");
    }
}
