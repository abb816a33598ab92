//! # abacus_core - Numeric Expression & Statistics Engine
//!
//! `abacus_core` is the computational heart of the Abacus calculator. Front
//! ends (keypad UI, history panel, plotter, CLI) pass text and numbers in and
//! render what comes back; all the arithmetic lives here.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; nothing is cached between calls
//! - **JSON-First**: Result types implement Serialize/Deserialize
//! - **Never panics on user input**: Expression problems become
//!   [`CalculationResult::Failure`], not `Err` or a crash
//! - **Loud on misuse**: Domain errors for invalid counts and probabilities
//!   are returned as [`CalcError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use abacus_core::{evaluate, AngleUnit};
//!
//! let result = evaluate("2(3+4)", AngleUnit::Radians);
//! assert_eq!(result.display_value(), Some("14"));
//!
//! let result = evaluate("sin(30)", AngleUnit::Degrees);
//! assert!((result.value().unwrap() - 0.5).abs() < 1e-12);
//!
//! // Serialize to JSON for the UI layer
//! let json = serde_json::to_string(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`expression`] - Normalization, evaluation and display formatting
//! - [`angle`] - Degree/radian selection and conversion
//! - [`statistics`] - Descriptive statistics, combinatorics, normal distribution
//! - [`graphing`] - Sampling `f(x)` for plots
//! - [`result`] - The [`CalculationResult`] union
//! - [`errors`] - Structured error types

pub mod angle;
pub mod errors;
pub mod expression;
pub mod graphing;
pub mod result;
pub mod statistics;

// Re-export commonly used types at crate root for convenience
pub use angle::{degrees_to_radians, radians_to_degrees, AngleUnit};
pub use errors::{CalcError, CalcResult};
pub use expression::{
    count_unclosed_parentheses,
    evaluate,
    has_balanced_parentheses,
    is_valid_expression,
};
pub use graphing::{sample_at, sample_range, GraphSample};
pub use result::CalculationResult;
pub use statistics::{
    calculate_statistics,
    combinations,
    factorial,
    normal_cdf,
    normal_inverse_cdf,
    normal_pdf,
    parse_data_input,
    permutations,
    StatisticsSummary,
};
