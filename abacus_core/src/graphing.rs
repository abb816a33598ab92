//! # Function Sampler
//!
//! Evaluates single-variable expressions `f(x)` for the plotting front end.
//! Each sample is evaluated independently in radians and nothing is cached;
//! a plotter that needs hundreds of points calls [`sample_range`] or batches
//! [`sample_at`] itself.
//!
//! Points where `f` is undefined (division by zero, `sqrt` of a negative,
//! malformed input) come back as `None` so the plotter can break the line.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::graphing::{sample_at, sample_range};
//!
//! assert_eq!(sample_at("x^2 + 1", 3.0), Some(10.0));
//! assert_eq!(sample_at("1/x", 0.0), None);
//!
//! let points = sample_range("2x", 0.0, 1.0, 4);
//! assert_eq!(points.len(), 5);
//! assert_eq!(points[4].y, Some(2.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::angle::AngleUnit;
use crate::expression::evaluate;

/// One plotted point. `y` is `None` where the function is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSample {
    pub x: f64,
    pub y: Option<f64>,
}

/// Evaluate `expression` at `x`, or `None` if the result is not a finite number.
pub fn sample_at(expression: &str, x: f64) -> Option<f64> {
    let substituted = substitute_variable(expression, x);
    log::trace!("sampling {:?} at x = {} as {:?}", expression, x, substituted);

    evaluate(&substituted, AngleUnit::Radians)
        .value()
        .filter(|y| y.is_finite())
}

/// `steps + 1` evenly spaced samples over `[x_min, x_max]`, endpoints included.
///
/// `steps == 0` yields the single sample at `x_min`.
pub fn sample_range(expression: &str, x_min: f64, x_max: f64, steps: usize) -> Vec<GraphSample> {
    if steps == 0 {
        return vec![GraphSample {
            x: x_min,
            y: sample_at(expression, x_min),
        }];
    }

    let step = (x_max - x_min) / steps as f64;
    (0..=steps)
        .map(|i| {
            let x = if i == steps { x_max } else { x_min + step * i as f64 };
            GraphSample {
                x,
                y: sample_at(expression, x),
            }
        })
        .collect()
}

/// Replace every standalone `x`/`X` with `(<x>)`.
///
/// An `x` counts as standalone when it is not preceded by a letter or `_`
/// and not followed by a letter, digit or `_`. That keeps `exp` and `max`
/// intact while still substituting into `2x`.
fn substitute_variable(expression: &str, x: f64) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let replacement = format!("({})", x);
    let mut result = String::with_capacity(expression.len() + replacement.len());

    for (i, &ch) in chars.iter().enumerate() {
        let is_variable = matches!(ch, 'x' | 'X')
            && (i == 0 || !is_word_letter(chars[i - 1]))
            && chars
                .get(i + 1)
                .map_or(true, |&next| !(next.is_alphanumeric() || next == '_'));

        if is_variable {
            result.push_str(&replacement);
        } else {
            result.push(ch);
        }
    }

    result
}

fn is_word_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
