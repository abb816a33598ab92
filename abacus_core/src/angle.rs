//! # Angle Units
//!
//! The calculator evaluates trigonometric functions either in degrees or in
//! radians. Exactly one [`AngleUnit`] is active for any single evaluation.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::angle::{degrees_to_radians, radians_to_degrees, AngleUnit};
//!
//! assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! assert!((radians_to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
//!
//! let unit: AngleUnit = "deg".parse().unwrap();
//! assert_eq!(unit, AngleUnit::Degrees);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// Angle Unit Selection
// ============================================================================

/// Angle convention for trigonometric and inverse-trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// sin/cos/tan take degrees, asin/acos/atan return degrees
    Degrees,
    /// Native evaluator semantics
    #[default]
    Radians,
}

/// A single-argument real function, as installed into an evaluation scope.
pub type UnaryFn = fn(f64) -> f64;

/// Trig overrides installed when evaluating in degrees.
static DEGREE_TRIG: [(&str, UnaryFn); 6] = [
    ("sin", |x: f64| degrees_to_radians(x).sin()),
    ("cos", |x: f64| degrees_to_radians(x).cos()),
    ("tan", |x: f64| degrees_to_radians(x).tan()),
    ("asin", |x: f64| radians_to_degrees(x.asin())),
    ("acos", |x: f64| radians_to_degrees(x.acos())),
    ("atan", |x: f64| radians_to_degrees(x.atan())),
];

impl AngleUnit {
    /// Functions that replace the evaluator's built-in trig for this unit.
    ///
    /// Radians needs no replacements and returns an empty table.
    pub fn trig_overrides(self) -> &'static [(&'static str, UnaryFn)] {
        match self {
            AngleUnit::Degrees => &DEGREE_TRIG,
            AngleUnit::Radians => &[],
        }
    }

    /// Short label used by front ends ("DEG" / "RAD")
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            other => Err(CalcError::invalid_input(
                "angle_unit",
                other,
                "expected 'deg' or 'rad'",
            )),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
