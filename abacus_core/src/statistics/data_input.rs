//! Parsing of free-form data lists typed or pasted into the statistics panel.

/// Separators between data values
fn is_separator(ch: char) -> bool {
    ch == ',' || ch == ';' || ch.is_whitespace()
}

/// Split `text` on runs of commas, semicolons, whitespace or newlines and
/// keep the tokens that parse as finite numbers, in order.
///
/// ```rust
/// use abacus_core::statistics::parse_data_input;
///
/// assert_eq!(parse_data_input("1, abc, 2; 3\n4"), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn parse_data_input(text: &str) -> Vec<f64> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
