//! # Error Types
//!
//! Structured error types for abacus_core.
//!
//! Only caller misuse is reported through [`CalcError`]: a negative count
//! passed to [`factorial`](crate::statistics::factorial), a probability
//! outside `(0, 1)` passed to
//! [`normal_inverse_cdf`](crate::statistics::normal_inverse_cdf), and so on.
//! Problems with user-typed expressions never surface here; the evaluator
//! folds them into a [`CalculationResult`](crate::result::CalculationResult)
//! failure instead.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::errors::{CalcError, CalcResult};
//!
//! fn validate_count(n: f64) -> CalcResult<()> {
//!     if n < 0.0 {
//!         return Err(CalcError::invalid_input("n", n.to_string(), "must not be negative"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_count(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for abacus_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An argument is outside the function's domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending argument
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("p", "1.5", "Probability must be between 0 and 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("n", "-1", "negative").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_input("r", "2.5", "must be a non-negative integer");
        assert_eq!(error.to_string(), "Invalid input for 'r': 2.5 - must be a non-negative integer");
        assert_eq!(error.field(), "r");
    }
}
