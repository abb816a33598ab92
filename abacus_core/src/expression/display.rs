//! Display formatting for evaluation results.
//!
//! Raw `f64` formatting is unsuitable for a calculator display: it prints
//! `inf`, shows binary noise (`0.30000000000000004`) and can run to hundreds
//! of digits. [`format_number`] bounds both precision and length.

/// Mantissa digits after the point in exponential notation
pub const EXPONENTIAL_DIGITS: usize = 6;

/// Significant digits kept in plain decimal notation
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Longest plain decimal string shown before switching to exponential
pub const MAX_DISPLAY_LEN: usize = 16;

/// Magnitudes above this are always shown in exponential notation
const LARGE_MAGNITUDE: f64 = 1e12;

/// Nonzero magnitudes below this are always shown in exponential notation
const SMALL_MAGNITUDE: f64 = 1e-10;

/// Format a result value for display.
///
/// # Example
///
/// ```rust
/// use abacus_core::expression::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "Error");
/// assert_eq!(format_number(2.5e15), "2.5e+15");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "Error".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude > LARGE_MAGNITUDE || (magnitude != 0.0 && magnitude < SMALL_MAGNITUDE) {
        return to_exponential(value, EXPONENTIAL_DIGITS);
    }

    let rounded = round_significant(value, SIGNIFICANT_DIGITS);
    // -0 reads as a bug on a calculator
    if rounded == 0.0 {
        return "0".to_string();
    }

    let text = rounded.to_string();
    if text.len() > MAX_DISPLAY_LEN {
        to_exponential(value, EXPONENTIAL_DIGITS)
    } else {
        text
    }
}

/// Round to `digits` significant digits.
fn round_significant(value: f64, digits: usize) -> f64 {
    let text = format!("{:.*e}", digits.saturating_sub(1), value);
    text.parse().unwrap_or(value)
}

/// Exponential notation with an explicit exponent sign, e.g. `1.5e+13`.
fn to_exponential(value: f64, digits: usize) -> String {
    let text = format!("{:.*e}", digits, value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };

    match exponent.strip_prefix('-') {
        Some(digits) => format!("{mantissa}e-{digits}"),
        None => format!("{mantissa}e+{exponent}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "Error");
    }

    #[test]
    fn test_plain_decimals() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(123456789012.0), "123456789012");
    }

    #[test]
    fn test_significant_digit_rounding() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(std::f64::consts::PI), "3.14159265359");
        assert_eq!(format_number(1.0 / 3.0), "0.333333333333");
    }

    #[test]
    fn test_large_and_small_magnitudes() {
        assert_eq!(format_number(1e13), "1e+13");
        assert_eq!(format_number(-1.2345678e20), "-1.234568e+20");
        assert_eq!(format_number(1.5e-11), "1.5e-11");
    }

    #[test]
    fn test_long_decimal_falls_back_to_exponential() {
        // Inside the plain range, but 12 significant digits need 21 characters
        assert_eq!(format_number(1.23456789012e-9), "1.234568e-9");
    }

    #[test]
    fn test_small_but_plain() {
        assert_eq!(format_number(0.0001), "0.0001");
    }
}
