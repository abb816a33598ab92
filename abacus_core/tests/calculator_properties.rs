//! Behavioural tests for the public abacus_core API.
//!
//! Covers:
//! - Operator precedence and IEEE edge cases
//! - Angle units
//! - Logarithm aliasing and implicit multiplication
//! - Parenthesis tracking
//! - Combinatorics identities and domain errors
//! - Descriptive statistics and data parsing
//! - Normal distribution round trips
//! - Function sampling

use abacus_core::{
    calculate_statistics, combinations, count_unclosed_parentheses, evaluate, factorial,
    has_balanced_parentheses, is_valid_expression, normal_cdf, normal_inverse_cdf,
    parse_data_input, permutations, sample_at, AngleUnit, CalculationResult,
};

fn approx(result: &CalculationResult, expected: f64, tolerance: f64) -> bool {
    result
        .value()
        .map_or(false, |value| (value - expected).abs() < tolerance)
}

#[test]
fn test_operator_precedence() {
    let rad = AngleUnit::Radians;
    assert_eq!(evaluate("2 + 3 * 4", rad).value(), Some(14.0));
    assert_eq!(evaluate("(2 + 3) * 4", rad).value(), Some(20.0));
    assert_eq!(evaluate("100 / 10 / 2", rad).value(), Some(5.0));
    assert_eq!(evaluate("8 - 2 * 3 + 1", rad).value(), Some(3.0));
}

#[test]
fn test_division_by_zero_succeeds() {
    let result = evaluate("1/0", AngleUnit::Radians);
    assert!(result.is_success());
    assert_eq!(result.display_value(), Some("Infinity"));
}

#[test]
fn test_blank_input_fails() {
    assert!(!evaluate("", AngleUnit::Radians).is_success());
    assert!(!evaluate("   ", AngleUnit::Degrees).is_success());
}

#[test]
fn test_angle_modes() {
    assert!(approx(&evaluate("sin(90)", AngleUnit::Degrees), 1.0, 1e-12));
    assert!(approx(&evaluate("sin(pi/2)", AngleUnit::Radians), 1.0, 1e-12));
    assert!(approx(&evaluate("asin(1)", AngleUnit::Degrees), 90.0, 1e-9));
    assert!(approx(&evaluate("cos(60)", AngleUnit::Degrees), 0.5, 1e-12));
}

#[test]
fn test_logarithm_aliasing() {
    let rad = AngleUnit::Radians;
    assert!(approx(&evaluate("log(1000)", rad), 3.0, 1e-12));
    assert!(approx(&evaluate("log10(100)", rad), 2.0, 1e-12));
    assert!(approx(&evaluate("ln(e)", rad), 1.0, 1e-12));
    assert!(approx(&evaluate("log2(8)", rad), 3.0, 1e-12));
}

#[test]
fn test_implicit_multiplication() {
    let rad = AngleUnit::Radians;
    assert!(approx(&evaluate("2π", rad), 2.0 * std::f64::consts::PI, 1e-12));
    assert_eq!(evaluate("2(3+4)", rad).value(), Some(14.0));
    assert_eq!(evaluate("3sin(0)", rad).value(), Some(0.0));

    assert!(is_valid_expression("log10(5)"));
    assert!(approx(&evaluate("log10(5)", rad), 5f64.log10(), 1e-12));
}

#[test]
fn test_parenthesis_tracking() {
    assert_eq!(count_unclosed_parentheses("(sin(x)"), 1);
    assert!(has_balanced_parentheses("()()((()))"));
    assert!(!has_balanced_parentheses("())"));
}

#[test]
fn test_combinatorics_identities() {
    for n in 0..=20 {
        let n = n as f64;
        assert_eq!(combinations(n, 0.0).unwrap(), 1.0);
        assert_eq!(permutations(n, n + 1.0).unwrap(), 0.0);
        for r in 0..=(n as usize) {
            let r = r as f64;
            assert_eq!(combinations(n, r).unwrap(), combinations(n, n - r).unwrap());
        }
    }
    assert_eq!(factorial(5.0).unwrap(), 120.0);
    assert!(factorial(-1.0).is_err());
    assert!(factorial(1.5).is_err());
}

#[test]
fn test_statistics_properties() {
    let empty = calculate_statistics(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.mean, 0.0);
    assert_eq!(empty.median, 0.0);
    assert_eq!(empty.std_dev, 0.0);
    assert_eq!(empty.variance, 0.0);
    assert_eq!(empty.sum, 0.0);
    assert!(empty.mode.is_empty());

    assert_eq!(calculate_statistics(&[1.0, 2.0, 2.0, 3.0]).mode, vec![2.0]);
    assert!(calculate_statistics(&[1.0, 2.0, 3.0, 4.0]).mode.is_empty());
    assert_eq!(calculate_statistics(&[1.0, 2.0, 3.0, 4.0]).median, 2.5);
}

#[test]
fn test_probability_round_trip() {
    let mut p = 0.01;
    while p < 1.0 {
        let x = normal_inverse_cdf(p, 0.0, 1.0).unwrap();
        assert!((normal_cdf(x, 0.0, 1.0) - p).abs() < 1e-3);
        p += 0.01;
    }
    assert!((normal_cdf(0.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    assert!((normal_inverse_cdf(0.975, 0.0, 1.0).unwrap() - 1.96).abs() < 1e-3);
}

#[test]
fn test_parse_data_input() {
    assert_eq!(parse_data_input("1, abc, 2; 3\n4"), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_sampler_undefined_at_pole() {
    assert_eq!(sample_at("1/x", 0.0), None);
    // The evaluator itself still succeeds on the same input
    assert!(evaluate("1/(0)", AngleUnit::Radians).is_success());
}
