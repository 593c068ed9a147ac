//! Keystroke validation for the numeric input fields.

use crate::numeric_text::{MAX_INPUT_LENGTH, matches_numeric_pattern};

/// The reason a proposed field value was rejected.
///
/// The [`Display`](std::fmt::Display) output is the short message shown next
/// to the field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error,
)]
pub enum ValidationError {
    /// The value contains something other than digits and a single point.
    #[display("Numbers only")]
    InvalidFormat,
    /// The field is already full and the edit would make it longer.
    #[display("The limit is 5")]
    LengthExceeded,
    /// The value starts with a decimal point.
    #[display("1st must be a number")]
    FirstCharNotDigit,
    /// The fifth character is a decimal point.
    #[display("5th must be a number")]
    FifthCharNotDigit,
}

/// Decides whether `proposed` may replace `current` as a field value.
///
/// Rules are checked in order and the first one that matches wins:
///
/// 1. Growing a value that is already [`MAX_INPUT_LENGTH`] characters long is
///    [`LengthExceeded`].
/// 2. A non-empty value outside `digits* ('.' digits*)?` is [`InvalidFormat`].
/// 3. A value starting with `'.'` is [`FirstCharNotDigit`].
/// 4. A value whose fifth character is `'.'` is [`FifthCharNotDigit`].
/// 5. Any other value longer than [`MAX_INPUT_LENGTH`] is [`LengthExceeded`].
///
/// Lengths are counted in characters.
///
/// # Errors
///
/// Returns the first rule the proposed value breaks.
///
/// # Examples
///
/// ```
/// use calorie_core::{ValidationError, validate_edit};
///
/// assert_eq!(validate_edit("12", "12.5"), Ok(()));
/// assert_eq!(validate_edit("12", "12a"), Err(ValidationError::InvalidFormat));
/// assert_eq!(validate_edit("", "."), Err(ValidationError::FirstCharNotDigit));
/// assert_eq!(validate_edit("1234", "1234."), Err(ValidationError::FifthCharNotDigit));
/// assert_eq!(validate_edit("12345", "123456"), Err(ValidationError::LengthExceeded));
/// ```
///
/// [`LengthExceeded`]: ValidationError::LengthExceeded
/// [`InvalidFormat`]: ValidationError::InvalidFormat
/// [`FirstCharNotDigit`]: ValidationError::FirstCharNotDigit
/// [`FifthCharNotDigit`]: ValidationError::FifthCharNotDigit
pub fn validate_edit(current: &str, proposed: &str) -> Result<(), ValidationError> {
    let current_len = current.chars().count();
    let proposed_len = proposed.chars().count();

    if current_len >= MAX_INPUT_LENGTH && proposed_len > current_len {
        return Err(ValidationError::LengthExceeded);
    }

    if !proposed.is_empty() && !matches_numeric_pattern(proposed) {
        return Err(ValidationError::InvalidFormat);
    }

    if proposed.starts_with('.') {
        return Err(ValidationError::FirstCharNotDigit);
    }

    if proposed.chars().nth(4) == Some('.') {
        return Err(ValidationError::FifthCharNotDigit);
    }

    // A paste into a shorter field must not get past the limit either.
    if proposed_len > MAX_INPUT_LENGTH {
        return Err(ValidationError::LengthExceeded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::InvalidFormat.to_string(), "Numbers only");
        assert_eq!(ValidationError::LengthExceeded.to_string(), "The limit is 5");
        assert_eq!(
            ValidationError::FirstCharNotDigit.to_string(),
            "1st must be a number"
        );
        assert_eq!(
            ValidationError::FifthCharNotDigit.to_string(),
            "5th must be a number"
        );
    }

    #[test]
    fn test_length_rule_wins_over_format() {
        // A full field rejects growth before looking at the new character.
        assert_eq!(
            validate_edit("12345", "12345x"),
            Err(ValidationError::LengthExceeded)
        );
        assert_eq!(
            validate_edit("1.234", ".1.234"),
            Err(ValidationError::LengthExceeded)
        );
    }

    #[test]
    fn test_full_field_may_shrink_or_be_replaced() {
        assert_eq!(validate_edit("12345", "1234"), Ok(()));
        assert_eq!(validate_edit("12345", ""), Ok(()));
        assert_eq!(validate_edit("12345", "54321"), Ok(()));
    }

    #[test]
    fn test_paste_longer_than_limit_is_rejected() {
        assert_eq!(
            validate_edit("", "1234567"),
            Err(ValidationError::LengthExceeded)
        );
        assert_eq!(
            validate_edit("12", "123456"),
            Err(ValidationError::LengthExceeded)
        );
    }

    #[test]
    fn test_long_paste_reports_content_rule_first() {
        assert_eq!(
            validate_edit("", ".12345"),
            Err(ValidationError::FirstCharNotDigit)
        );
        assert_eq!(
            validate_edit("", "12a456"),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_edit("", "1234.5"),
            Err(ValidationError::FifthCharNotDigit)
        );
    }

    #[test]
    fn test_format_checked_before_first_char() {
        assert_eq!(validate_edit("", ".."), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_edit("", "-1"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_first_char_point() {
        assert_eq!(validate_edit("", "."), Err(ValidationError::FirstCharNotDigit));
        assert_eq!(
            validate_edit("5", ".5"),
            Err(ValidationError::FirstCharNotDigit)
        );
    }

    #[test]
    fn test_fifth_char_point() {
        assert_eq!(
            validate_edit("1234", "1234."),
            Err(ValidationError::FifthCharNotDigit)
        );
        assert_eq!(validate_edit("123", "123."), Ok(()));
        assert_eq!(validate_edit("1.23", "1.234"), Ok(()));
    }

    #[test]
    fn test_empty_is_always_accepted() {
        assert_eq!(validate_edit("", ""), Ok(()));
        assert_eq!(validate_edit("1", ""), Ok(()));
    }

    proptest! {
        #[test]
        fn prop_well_formed_values_are_accepted(
            text in "([0-9]{1,5}|[0-9]{1,3}\\.[0-9]{0,1}|[0-9]{1,2}\\.[0-9]{0,2}|[0-9]\\.[0-9]{0,3})"
        ) {
            prop_assume!(text.chars().count() <= MAX_INPUT_LENGTH);
            prop_assert_eq!(validate_edit("", &text), Ok(()));
        }

        #[test]
        fn prop_growing_full_field_is_rejected(
            current in "[0-9]{5}",
            extra in any::<char>(),
        ) {
            let proposed = format!("{current}{extra}");
            prop_assert_eq!(
                validate_edit(&current, &proposed),
                Err(ValidationError::LengthExceeded)
            );
        }

        #[test]
        fn prop_leading_point_is_rejected(rest in "[0-9]{0,9}") {
            let proposed = format!(".{rest}");
            prop_assert_eq!(
                validate_edit("", &proposed),
                Err(ValidationError::FirstCharNotDigit)
            );
        }
    }
}
