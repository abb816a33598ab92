//! # Calculation Results
//!
//! [`CalculationResult`] is what the evaluator hands back for every
//! expression: either a value with its display text, or a short error
//! message suitable for showing to the user as-is.
//!
//! ## JSON Example
//!
//! ```json
//! { "status": "success", "value": 14.0, "display_value": "14" }
//! { "status": "failure", "error": "Missing closing parenthesis" }
//! ```

use serde::{Deserialize, Serialize};

use crate::expression::display::format_number;

/// Outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationResult {
    /// The expression evaluated. `value` may be infinite or NaN.
    Success { value: f64, display_value: String },
    /// The expression could not be evaluated
    Failure { error: String },
}

impl CalculationResult {
    /// Build a success, deriving the display text from the value.
    pub fn success(value: f64) -> Self {
        CalculationResult::Success {
            value,
            display_value: format_number(value),
        }
    }

    /// Build a failure carrying a user-facing message
    pub fn failure(error: impl Into<String>) -> Self {
        CalculationResult::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResult::Success { .. })
    }

    /// Numeric value, if the evaluation succeeded
    pub fn value(&self) -> Option<f64> {
        match self {
            CalculationResult::Success { value, .. } => Some(*value),
            CalculationResult::Failure { .. } => None,
        }
    }

    /// Display text, if the evaluation succeeded
    pub fn display_value(&self) -> Option<&str> {
        match self {
            CalculationResult::Success { display_value, .. } => Some(display_value),
            CalculationResult::Failure { .. } => None,
        }
    }

    /// Error message, if the evaluation failed
    pub fn error(&self) -> Option<&str> {
        match self {
            CalculationResult::Success { .. } => None,
            CalculationResult::Failure { error } => Some(error),
        }
    }
}
