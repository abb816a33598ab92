//! # Expression Normalizer
//!
//! Rewrites what a user types on the keypad into text the evaluator parses
//! without ambiguity. The passes run in a fixed order and later passes rely
//! on the output shape of earlier ones:
//!
//! 1. Glyphs: `×` → `*`, `÷` → `/`, `−` → `-`, `π` → `pi`
//! 2. Square root: `√(` → `sqrt(`
//! 3. Logarithms: `log(` → `log10(`; `ln(`, `log10(`, `log2(` kept
//! 4. Implicit multiplication: `2pi` → `2*pi`, `2(3)` → `2*(3)`
//! 5. Percent: `50%` → `(50/100)`
//!
//! Normalizing already-normalized text is not guaranteed to be a no-op.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::expression::normalize;
//!
//! assert_eq!(normalize("2π"), "2*pi");
//! assert_eq!(normalize("log(1000)"), "log10(1000)");
//! assert_eq!(normalize("√(16)×50%"), "sqrt(16)*(50/100)");
//! ```

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Visual glyphs and their canonical replacements
const GLYPHS: [(&str, &str); 4] = [("×", "*"), ("÷", "/"), ("−", "-"), ("π", "pi")];

// Placeholders never produced by a keypad or keyboard
const LN_TOKEN: &str = "\u{E000}";
const LOG10_TOKEN: &str = "\u{E001}";
const LOG2_TOKEN: &str = "\u{E002}";

static PERCENT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)%").expect("percent pattern is valid")
});

/// Normalize raw user input. Pure and total.
pub fn normalize(raw: &str) -> String {
    let text = replace_glyphs(raw);
    let text = text.replace("√(", "sqrt(");
    let text = resolve_logarithms(&text);
    let text = insert_implicit_multiplication(&text);
    let normalized = rewrite_percent(&text);
    log::debug!("normalized {:?} -> {:?}", raw, normalized);
    normalized
}

fn replace_glyphs(text: &str) -> String {
    GLYPHS
        .iter()
        .fold(text.to_string(), |acc, (glyph, canonical)| acc.replace(glyph, canonical))
}

/// A bare `log(` is base 10. `ln(` is the natural log and `log10(`/`log2(`
/// are already explicit, so they are parked behind placeholders while bare
/// `log(` is renamed, then restored.
fn resolve_logarithms(text: &str) -> String {
    text.replace("log10(", LOG10_TOKEN)
        .replace("log2(", LOG2_TOKEN)
        .replace("ln(", LN_TOKEN)
        .replace("log(", "log10(")
        .replace(LN_TOKEN, "ln(")
        .replace(LOG10_TOKEN, "log10(")
        .replace(LOG2_TOKEN, "log2(")
}

fn insert_implicit_multiplication(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 8);

    for (i, &ch) in chars.iter().enumerate() {
        result.push(ch);

        if !ch.is_ascii_digit() || is_function_name_digit(&chars, i) {
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }

        let Some(&next) = chars.get(j) else {
            continue;
        };
        if next == '(' || (next.is_alphabetic() && !is_exponent_marker(&chars, j)) {
            result.push('*');
        }
    }

    result
}

/// True when the digit at `i` is the tail of a name such as `log10` or
/// `log2`: its run of digits starts right after a letter.
fn is_function_name_digit(chars: &[char], i: usize) -> bool {
    let mut start = i;
    while start > 0 && chars[start - 1].is_ascii_digit() {
        start -= 1;
    }
    start > 0 && (chars[start - 1].is_alphabetic() || chars[start - 1] == '_')
}

/// True when the letter at `j` is the `e` of a literal like `2e5` or `1E-3`.
fn is_exponent_marker(chars: &[char], j: usize) -> bool {
    if !matches!(chars[j], 'e' | 'E') {
        return false;
    }
    let mut k = j + 1;
    if matches!(chars.get(k), Some('+') | Some('-')) {
        k += 1;
    }
    chars.get(k).is_some_and(|c| c.is_ascii_digit())
}

fn rewrite_percent(text: &str) -> String {
    PERCENT_LITERAL.replace_all(text, "($1/100)").into_owned()
}
