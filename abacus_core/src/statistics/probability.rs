//! # Normal Distribution
//!
//! Density, cumulative distribution and quantile function of N(mean, σ²).
//!
//! Both the CDF and its inverse are closed-form approximations rather than
//! exact evaluations:
//!
//! - [`normal_cdf`] uses Abramowitz & Stegun 7.1.26 for erf (absolute error
//!   about 1.5e-7)
//! - [`normal_inverse_cdf`] uses Peter Acklam's rational approximation
//!   (relative error about 1.15e-9)
//!
//! They are independent methods, so `normal_cdf(normal_inverse_cdf(p))`
//! returns `p` only to within roughly 1e-6.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::statistics::{normal_cdf, normal_inverse_cdf, NormalDistribution};
//!
//! assert!((normal_cdf(0.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
//! assert!((normal_inverse_cdf(0.975, 0.0, 1.0).unwrap() - 1.96).abs() < 1e-3);
//!
//! // IQ scores: mean 100, σ 15
//! let iq = NormalDistribution::new(100.0, 15.0).unwrap();
//! assert!((iq.cdf(130.0) - 0.97725).abs() < 1e-4);
//! ```

use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Abramowitz & Stegun 7.1.26
// ============================================================================

const AS_P: f64 = 0.3275911;
const AS_A: [f64; 5] = [
    0.254829592,
    -0.284496736,
    1.421413741,
    -1.453152027,
    1.061405429,
];

// ============================================================================
// Acklam's inverse normal CDF
// ============================================================================

/// Central region numerator
const ACKLAM_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Central region denominator
const ACKLAM_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Tail numerator
const ACKLAM_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Tail denominator
const ACKLAM_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Breakpoint between the lower tail and the central region
pub const P_LOW: f64 = 0.02425;
/// Breakpoint between the central region and the upper tail
pub const P_HIGH: f64 = 1.0 - P_LOW;

/// Gaussian probability density at `x`.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// P(X ≤ x) for X ~ N(mean, std_dev²).
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    0.5 * (1.0 + sign * erf_approx(z.abs() / SQRT_2))
}

/// erf(x) for x ≥ 0
fn erf_approx(x: f64) -> f64 {
    let t = 1.0 / (1.0 + AS_P * x);
    let [a1, a2, a3, a4, a5] = AS_A;
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    1.0 - poly * (-x * x).exp()
}

/// The x with P(X ≤ x) = p for X ~ N(mean, std_dev²).
///
/// # Errors
///
/// `p` must lie strictly between 0 and 1.
pub fn normal_inverse_cdf(p: f64, mean: f64, std_dev: f64) -> CalcResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(CalcError::invalid_input(
            "p",
            p.to_string(),
            "Probability must be between 0 and 1 (exclusive)",
        ));
    }
    Ok(standard_normal_quantile(p) * std_dev + mean)
}

fn standard_normal_quantile(p: f64) -> f64 {
    let [a1, a2, a3, a4, a5, a6] = ACKLAM_A;
    let [b1, b2, b3, b4, b5] = ACKLAM_B;
    let [c1, c2, c3, c4, c5, c6] = ACKLAM_C;
    let [d1, d2, d3, d4] = ACKLAM_D;

    let tail = |q: f64| {
        (((((c1 * q + c2) * q + c3) * q + c4) * q + c5) * q + c6)
            / ((((d1 * q + d2) * q + d3) * q + d4) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((a1 * r + a2) * r + a3) * r + a4) * r + a5) * r + a6) * q
            / (((((b1 * r + b2) * r + b3) * r + b4) * r + b5) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// A normal distribution with fixed parameters.
///
/// `Default` is the standard normal N(0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalDistribution {
    /// Create a distribution, rejecting a non-positive or non-finite σ.
    pub fn new(mean: f64, std_dev: f64) -> CalcResult<Self> {
        if !mean.is_finite() {
            return Err(CalcError::invalid_input("mean", mean.to_string(), "Mean must be finite"));
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(CalcError::invalid_input(
                "std_dev",
                std_dev.to_string(),
                "Standard deviation must be positive",
            ));
        }
        Ok(NormalDistribution { mean, std_dev })
    }

    /// N(0, 1)
    pub fn standard() -> Self {
        NormalDistribution {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x, self.mean, self.std_dev)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        normal_cdf(x, self.mean, self.std_dev)
    }

    pub fn inverse_cdf(&self, p: f64) -> CalcResult<f64> {
        normal_inverse_cdf(p, self.mean, self.std_dev)
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::standard()
    }
}
