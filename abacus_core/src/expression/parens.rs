//! Parenthesis bookkeeping for the input line.
//!
//! Front ends use these to auto-close groups and to show how many `)` are
//! still owed. Only `(` and `)` are counted; the grammar has no string
//! literals, so nothing needs to be skipped.

/// Final depth of a left-to-right scan, and whether it ever dipped below zero.
fn scan_depth(text: &str) -> (i64, bool) {
    let mut depth: i64 = 0;
    let mut went_negative = false;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    went_negative = true;
                }
            }
            _ => {}
        }
    }
    (depth, went_negative)
}

/// True when every `)` closes an earlier `(` and nothing is left open.
///
/// ```rust
/// use abacus_core::expression::has_balanced_parentheses;
///
/// assert!(has_balanced_parentheses("()()((()))"));
/// assert!(!has_balanced_parentheses("())"));
/// ```
pub fn has_balanced_parentheses(text: &str) -> bool {
    let (depth, went_negative) = scan_depth(text);
    !went_negative && depth == 0
}

/// True when some `)` appears with no open `(` to close.
pub(crate) fn closes_before_opening(text: &str) -> bool {
    scan_depth(text).1
}

/// Number of `(` still waiting for a `)`; never negative.
pub fn count_unclosed_parentheses(text: &str) -> usize {
    let (depth, _) = scan_depth(text);
    depth.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert!(has_balanced_parentheses(""));
        assert!(has_balanced_parentheses("2+3"));
        assert!(has_balanced_parentheses("()()((()))"));
        assert!(has_balanced_parentheses("sin(cos(0))"));
    }

    #[test]
    fn test_unbalanced() {
        assert!(!has_balanced_parentheses("())"));
        assert!(!has_balanced_parentheses("(()"));
        // Ends at zero but closes before opening
        assert!(!has_balanced_parentheses(")("));
    }

    #[test]
    fn test_closes_before_opening() {
        assert!(closes_before_opening("2)"));
        assert!(closes_before_opening("(1))"));
        assert!(!closes_before_opening("(2+3"));
        assert!(!closes_before_opening("sin(cos(0))"));
    }

    #[test]
    fn test_unclosed_count() {
        assert_eq!(count_unclosed_parentheses("(sin(x)"), 1);
        assert_eq!(count_unclosed_parentheses("((("), 3);
        assert_eq!(count_unclosed_parentheses("())"), 0);
        assert_eq!(count_unclosed_parentheses("2*(3+(4"), 2);
    }
}
