//! Decimal text accepted by the numeric input fields.
//!
//! The accepted shape is `digits* ('.' digits*)?`: any run of ASCII digits
//! with at most one decimal point anywhere in it. The empty string matches.

/// Maximum number of characters a numeric field may hold.
pub const MAX_INPUT_LENGTH: usize = 5;

/// Returns `true` if `text` matches `digits* ('.' digits*)?`.
///
/// # Examples
///
/// ```
/// use calorie_core::numeric_text::matches_numeric_pattern;
///
/// assert!(matches_numeric_pattern(""));
/// assert!(matches_numeric_pattern("12.5"));
/// assert!(matches_numeric_pattern("."));
/// assert!(!matches_numeric_pattern("12.5.3"));
/// assert!(!matches_numeric_pattern("-1"));
/// ```
#[must_use]
pub fn matches_numeric_pattern(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|ch| match ch {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

/// Parses pattern-matching text into a number.
///
/// Returns `None` when the text does not match the numeric pattern or holds
/// no digits at all (`""` or `"."`).
///
/// # Examples
///
/// ```
/// use calorie_core::numeric_text::parse_number;
///
/// assert_eq!(parse_number("033"), Some(33.0));
/// assert_eq!(parse_number("5."), Some(5.0));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number("."), None);
/// assert_eq!(parse_number(""), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    if !matches_numeric_pattern(text) || !text.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_pattern_rejects_foreign_characters() {
        for text in ["1a", "1,5", " 1", "1e3", "+1", "-", "1..", "..", "1.2.3"] {
            assert!(!matches_numeric_pattern(text), "{text:?} should not match");
        }
    }

    #[test]
    fn test_pattern_accepts_point_anywhere_once() {
        for text in ["", ".", "1.", ".1", "1.1", "00000", "12345", "1234."] {
            assert!(matches_numeric_pattern(text), "{text:?} should match");
        }
    }

    #[test]
    fn test_parse_number_keeps_leading_zeros() {
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("007"), Some(7.0));
        assert_eq!(parse_number("0.25"), Some(0.25));
    }

    #[test]
    fn test_parse_number_rejects_non_pattern_text() {
        assert_eq!(parse_number("1e3"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("12.5.3"), None);
    }

    proptest! {
        #[test]
        fn prop_digit_strings_parse(digits in "[0-9]{1,5}") {
            let parsed = parse_number(&digits);
            prop_assert!(parsed.is_some());
        }

        #[test]
        fn prop_pattern_strings_match(text in "[0-9]{0,3}(\\.[0-9]{0,3})?") {
            prop_assert!(matches_numeric_pattern(&text));
        }
    }
}
