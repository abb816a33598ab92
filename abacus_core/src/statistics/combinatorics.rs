//! # Combinatorics
//!
//! Factorials, permutations and combinations over `f64` counts.
//!
//! Arguments must be non-negative whole numbers; anything else is a
//! [`CalcError::InvalidInput`]. Front ends are expected to check inputs
//! before calling, so these errors indicate caller misuse.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::statistics::{combinations, factorial, permutations};
//!
//! assert_eq!(factorial(5.0).unwrap(), 120.0);
//! assert_eq!(permutations(5.0, 2.0).unwrap(), 20.0);
//! assert_eq!(combinations(52.0, 5.0).unwrap(), 2_598_960.0);
//! assert!(factorial(-1.0).is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Largest n whose factorial fits in an `f64` (170! ≈ 7.26e306).
pub const MAX_FACTORIAL_INPUT: f64 = 170.0;

fn require_count(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "must be a non-negative integer",
        ));
    }
    Ok(())
}

/// n! for whole n ≥ 0.
///
/// Returns `f64::INFINITY` for n > 170 rather than overflowing silently.
pub fn factorial(n: f64) -> CalcResult<f64> {
    require_count("n", n)?;
    if n > MAX_FACTORIAL_INPUT {
        log::debug!("factorial({}) exceeds the f64 range", n);
        return Ok(f64::INFINITY);
    }
    if n <= 1.0 {
        return Ok(1.0);
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    Ok(product)
}

/// Ordered selections nPr = n · (n−1) · … · (n−r+1).
///
/// Zero when r > n: there are no ways to pick more items than exist.
/// Saturates at `f64::INFINITY` once the product leaves the `f64` range.
pub fn permutations(n: f64, r: f64) -> CalcResult<f64> {
    require_count("n", n)?;
    require_count("r", r)?;
    if r > n {
        return Ok(0.0);
    }

    let mut product = 1.0;
    let mut i = 0.0;
    while i < r {
        product *= n - i;
        if product.is_infinite() {
            log::debug!("permutations({}, {}) exceeds the f64 range", n, r);
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(product)
}

/// Unordered selections nCr.
///
/// Built up incrementally over min(r, n−r) steps so every intermediate
/// value is itself a binomial coefficient; `n!` would overflow long before
/// the result does. Saturates at `f64::INFINITY` like [`factorial`].
pub fn combinations(n: f64, r: f64) -> CalcResult<f64> {
    require_count("n", n)?;
    require_count("r", r)?;
    if r > n {
        return Ok(0.0);
    }
    if r == 0.0 || r == n {
        return Ok(1.0);
    }

    let k = r.min(n - r);
    let mut result = 1.0;
    let mut i = 0.0;
    while i < k {
        result = result * (n - i) / (i + 1.0);
        if result.is_infinite() {
            log::debug!("combinations({}, {}) exceeds the f64 range", n, r);
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(result.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0).unwrap(), 1.0);
        assert_eq!(factorial(1.0).unwrap(), 1.0);
        assert_eq!(factorial(5.0).unwrap(), 120.0);
        assert_eq!(factorial(10.0).unwrap(), 3_628_800.0);
    }

    #[test]
    fn test_factorial_limits() {
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(factorial(171.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_factorial_domain() {
        assert!(factorial(-1.0).is_err());
        assert!(factorial(1.5).is_err());
        assert!(factorial(f64::NAN).is_err());
        assert!(factorial(f64::INFINITY).is_err());

        let err = factorial(-1.0).unwrap_err();
        assert_eq!(err.field(), "n");
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5.0, 2.0).unwrap(), 20.0);
        assert_eq!(permutations(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(permutations(5.0, 5.0).unwrap(), 120.0);
        assert_eq!(permutations(3.0, 4.0).unwrap(), 0.0);
        assert!(permutations(5.0, -1.0).is_err());
        assert_eq!(permutations(5.0, 2.5).unwrap_err().field(), "r");
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(5.0, 2.0).unwrap(), 10.0);
        assert_eq!(combinations(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(combinations(5.0, 5.0).unwrap(), 1.0);
        assert_eq!(combinations(3.0, 4.0).unwrap(), 0.0);
        assert!(combinations(-5.0, 2.0).is_err());
    }

    #[test]
    fn test_huge_counts_saturate() {
        assert_eq!(permutations(1e12, 1e12).unwrap(), f64::INFINITY);
        assert_eq!(permutations(1e18, 1e17).unwrap(), f64::INFINITY);
        assert_eq!(combinations(1e12, 5e11).unwrap(), f64::INFINITY);
        assert_eq!(combinations(1e18, 3e17).unwrap(), f64::INFINITY);
        // Large n with a small r stays finite
        assert_eq!(combinations(1e12, 1.0).unwrap(), 1e12);
    }

    #[test]
    fn test_combinations_symmetry() {
        for n in 0..=30 {
            for r in 0..=n {
                let (n, r) = (n as f64, r as f64);
                assert_eq!(combinations(n, r).unwrap(), combinations(n, n - r).unwrap());
            }
        }
    }

    #[test]
    fn test_combinations_beyond_factorial_range() {
        // 200! overflows, but C(200, 3) is modest
        assert_eq!(combinations(200.0, 3.0).unwrap(), 1_313_400.0);
        assert_eq!(combinations(200.0, 197.0).unwrap(), 1_313_400.0);
    }
}
