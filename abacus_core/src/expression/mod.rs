//! # Expression Pipeline
//!
//! Raw text → [`normalize`] → [`evaluate`] → [`CalculationResult`](crate::result::CalculationResult).
//!
//! - [`normalizer`] - Shorthand rewriting (glyphs, `log`, implicit `*`, `%`)
//! - [`evaluator`] - Evaluation with angle-unit semantics and error mapping
//! - [`display`] - Bounded-precision display text for results
//! - [`parens`] - Parenthesis balance helpers for the input line

pub mod display;
pub mod evaluator;
pub mod normalizer;
pub mod parens;

pub use display::format_number;
pub use evaluator::{evaluate, is_valid_expression};
pub use normalizer::normalize;
pub use parens::{count_unclosed_parentheses, has_balanced_parentheses};
