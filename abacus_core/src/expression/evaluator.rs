//! # Evaluation Adapter
//!
//! Wraps the `meval` expression evaluator: normalizes the input, installs
//! the angle-unit function table, evaluates, and turns the outcome into a
//! [`CalculationResult`].
//!
//! Failures in user input never escape as `Err` or panics. They become
//! [`CalculationResult::Failure`] with a short message. Numeric edge cases
//! are not failures: `1/0` is `Infinity` and `sqrt(-1)` is a NaN success
//! shown as `Error`, exactly as IEEE arithmetic produces them.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::angle::AngleUnit;
//! use abacus_core::expression::evaluate;
//!
//! let result = evaluate("sin(90)", AngleUnit::Degrees);
//! assert!((result.value().unwrap() - 1.0).abs() < 1e-12);
//!
//! let result = evaluate("1/0", AngleUnit::Radians);
//! assert_eq!(result.display_value(), Some("Infinity"));
//! ```

use meval::{Context, Expr, FuncEvalError, ParseError, RPNError};

use crate::angle::AngleUnit;
use crate::expression::normalizer::normalize;
use crate::expression::parens::{closes_before_opening, count_unclosed_parentheses};
use crate::result::CalculationResult;

pub const EMPTY_EXPRESSION: &str = "Empty expression";
pub const UNKNOWN_FUNCTION: &str = "Unknown function";
pub const UNKNOWN_VARIABLE: &str = "Unknown variable";
pub const UNEXPECTED_END: &str = "Unexpected end of expression";
pub const MISSING_VALUE: &str = "Missing value";
pub const MISSING_CLOSING_PAREN: &str = "Missing closing parenthesis";
pub const UNEXPECTED_CLOSING_PAREN: &str = "Unexpected closing parenthesis";
pub const WRONG_ARGUMENT_COUNT: &str = "Wrong number of arguments";
pub const SYNTAX_ERROR: &str = "Syntax error";

/// Unrecognised evaluator messages longer than this collapse to [`SYNTAX_ERROR`].
const MAX_RAW_MESSAGE_LEN: usize = 40;

/// Evaluate a user expression under the given angle unit.
pub fn evaluate(expression: &str, angle_unit: AngleUnit) -> CalculationResult {
    if expression.trim().is_empty() {
        return CalculationResult::failure(EMPTY_EXPRESSION);
    }

    let normalized = normalize(expression);
    let outcome = normalized
        .parse::<Expr>()
        .and_then(|expr| expr.eval_with_context(evaluation_context(angle_unit)));

    match outcome {
        Ok(value) => CalculationResult::success(value),
        Err(err) => {
            let message = describe_failure(&normalized, &err);
            log::debug!("evaluation of {:?} failed: {} ({})", normalized, message, err);
            CalculationResult::failure(message)
        }
    }
}

/// True when the expression is non-blank and parses after normalization.
///
/// Nothing is evaluated, so `foo(1)` is valid here even though evaluating
/// it reports an unknown function.
pub fn is_valid_expression(expression: &str) -> bool {
    if expression.trim().is_empty() {
        return false;
    }
    normalize(expression).parse::<Expr>().is_ok()
}

/// Function scope for one evaluation.
///
/// `log10`/`log2` are the canonical names the normalizer emits. Degree mode
/// replaces the built-in trig functions with the unit's override table.
fn evaluation_context(angle_unit: AngleUnit) -> Context<'static> {
    let mut context = Context::new();
    context.func("log10", f64::log10);
    context.func("log2", f64::log2);
    for &(name, function) in angle_unit.trig_overrides() {
        context.func(name, function);
    }
    context
}

/// Map a failed evaluation to a short message for the display.
///
/// Parenthesis problems are reported from a scan of the input; the
/// tokenizer rejects a stray `)` before its own bracket check runs.
fn describe_failure(normalized: &str, err: &meval::Error) -> String {
    if closes_before_opening(normalized) {
        return UNEXPECTED_CLOSING_PAREN.to_string();
    }
    if count_unclosed_parentheses(normalized) > 0 {
        return MISSING_CLOSING_PAREN.to_string();
    }
    describe_error(normalized, err)
}

fn describe_error(normalized: &str, err: &meval::Error) -> String {
    let known = match err {
        meval::Error::UnknownVariable(_) => Some(UNKNOWN_VARIABLE),
        meval::Error::Function(_, FuncEvalError::UnknownFunction) => Some(UNKNOWN_FUNCTION),
        meval::Error::Function(_, _) => Some(WRONG_ARGUMENT_COUNT),
        meval::Error::ParseError(ParseError::MissingRParen(_)) => Some(MISSING_CLOSING_PAREN),
        meval::Error::ParseError(ParseError::MissingArgument) => Some(UNEXPECTED_END),
        meval::Error::RPNError(RPNError::MismatchedLParen(_)) => Some(MISSING_CLOSING_PAREN),
        meval::Error::RPNError(RPNError::MismatchedRParen(_)) => Some(UNEXPECTED_CLOSING_PAREN),
        meval::Error::RPNError(RPNError::NotEnoughOperands(_)) => Some(MISSING_VALUE),
        meval::Error::ParseError(ParseError::UnexpectedToken(pos)) => {
            describe_unexpected_token(normalized, *pos)
        }
        _ => None,
    };

    match known {
        Some(message) => message.to_string(),
        None => shorten_message(&err.to_string()),
    }
}

/// An operator where an operand belongs means a value is missing.
fn describe_unexpected_token(normalized: &str, pos: usize) -> Option<&'static str> {
    let token = normalized.get(pos..)?.trim_start().chars().next()?;
    match token {
        '*' | '/' | '^' | ',' => Some(MISSING_VALUE),
        ')' => Some(UNEXPECTED_CLOSING_PAREN),
        _ => None,
    }
}

fn shorten_message(raw: &str) -> String {
    if raw.chars().count() > MAX_RAW_MESSAGE_LEN {
        SYNTAX_ERROR.to_string()
    } else {
        raw.to_string()
    }
}
