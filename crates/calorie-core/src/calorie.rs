//! Weight-based calorie calculation.

use crate::{
    field::{EditOutcome, ErrorId, NumericField},
    numeric_text::parse_number,
};

/// Computes `(calories_per_100g / 100) * weight_in_grams`.
///
/// Returns `None` if either text is not a number in the accepted pattern,
/// including the empty string. No rounding is applied.
///
/// # Examples
///
/// ```
/// use calorie_core::compute_total_calories;
///
/// assert_eq!(compute_total_calories("200", "150"), Some(300.0));
/// assert_eq!(compute_total_calories("", "150"), None);
/// assert_eq!(compute_total_calories("12.5.3", "10"), None);
/// ```
#[must_use]
pub fn compute_total_calories(calories_per_100g: &str, weight_in_grams: &str) -> Option<f64> {
    let calories = parse_number(calories_per_100g)?;
    let weight = parse_number(weight_in_grams)?;
    Some((calories / 100.0) * weight)
}

/// Formats a total for display.
///
/// Whole numbers are shown without decimals, anything else with two. Ties
/// round away from zero, so `0.125` is shown as `"0.13"`.
///
/// # Examples
///
/// ```
/// use calorie_core::format_total_calories;
///
/// assert_eq!(format_total_calories(300.0), "300");
/// assert_eq!(format_total_calories(49.5), "49.50");
/// assert_eq!(format_total_calories(0.125), "0.13");
/// ```
#[must_use]
pub fn format_total_calories(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{total:.0}")
    } else {
        // `{:.2}` alone rounds ties to even.
        let rounded = (total * 100.0).round() / 100.0;
        format!("{rounded:.2}")
    }
}

/// Identifies one of the two inputs of a [`CalorieForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Calories per 100 grams of the food.
    CaloriesPer100g,
    /// Weight of the portion in grams.
    WeightInGrams,
}

impl FieldId {
    /// Both fields in display order.
    pub const ALL: [Self; 2] = [Self::CaloriesPer100g, Self::WeightInGrams];

    /// Returns the input label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CaloriesPer100g => "Calories per 100g",
            Self::WeightInGrams => "Weight (in grams)",
        }
    }
}

/// View state of the "calculate with weight" screen.
///
/// Two independent fields feed one optional result. The result only appears
/// after [`calculate`](Self::calculate) and disappears again as soon as an
/// accepted edit leaves either input unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalorieForm {
    calories_per_100g: NumericField,
    weight_in_grams: NumericField,
    result: Option<f64>,
}

impl CalorieForm {
    /// Creates a form with empty fields and no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the requested field.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &NumericField {
        match id {
            FieldId::CaloriesPer100g => &self.calories_per_100g,
            FieldId::WeightInGrams => &self.weight_in_grams,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut NumericField {
        match id {
            FieldId::CaloriesPer100g => &mut self.calories_per_100g,
            FieldId::WeightInGrams => &mut self.weight_in_grams,
        }
    }

    /// Returns the last computed total.
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Applies a keystroke to one field.
    pub fn edit(&mut self, id: FieldId, proposed: &str) -> EditOutcome {
        let outcome = self.field_mut(id).edit(proposed);
        if outcome.is_accepted() && self.compute().is_none() {
            self.result = None;
        }
        outcome
    }

    /// Clears the error of `id` if it is still the instance `error_id`.
    pub fn dismiss_error(&mut self, id: FieldId, error_id: ErrorId) -> bool {
        self.field_mut(id).dismiss_error(error_id)
    }

    /// Recomputes the total from the current field values and stores it.
    pub fn calculate(&mut self) -> Option<f64> {
        self.result = self.compute();
        self.result
    }

    fn compute(&self) -> Option<f64> {
        compute_total_calories(self.calories_per_100g.value(), self.weight_in_grams.value())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_compute_examples() {
        assert_eq!(compute_total_calories("200", "150"), Some(300.0));
        let total = compute_total_calories("033", "150").unwrap();
        assert!((total - 49.5).abs() < 1e-9);
        assert_eq!(compute_total_calories("", "150"), None);
        assert_eq!(compute_total_calories("150", ""), None);
        assert_eq!(compute_total_calories("12.5.3", "10"), None);
        assert_eq!(compute_total_calories(".", "10"), None);
    }

    #[test]
    fn test_compute_accepts_trailing_point() {
        assert_eq!(compute_total_calories("100.", "10"), Some(10.0));
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(format_total_calories(300.0), "300");
        assert_eq!(format_total_calories(0.0), "0");
        assert_eq!(
            format_total_calories(compute_total_calories("033", "150").unwrap()),
            "49.50"
        );
        assert_eq!(format_total_calories(12.25), "12.25");
    }

    #[test]
    fn test_format_rounds_ties_up() {
        assert_eq!(
            format_total_calories(compute_total_calories("12.5", "1").unwrap()),
            "0.13"
        );
        assert_eq!(
            format_total_calories(compute_total_calories("5", "12.5").unwrap()),
            "0.63"
        );
        assert_eq!(format_total_calories(0.124), "0.12");
    }

    #[test]
    fn test_form_calculate() {
        let mut form = CalorieForm::new();
        assert_eq!(form.calculate(), None);

        assert!(form.edit(FieldId::CaloriesPer100g, "200").is_accepted());
        assert!(form.edit(FieldId::WeightInGrams, "150").is_accepted());
        assert_eq!(form.result(), None);

        assert_eq!(form.calculate(), Some(300.0));
        assert_eq!(form.result(), Some(300.0));
    }

    #[test]
    fn test_form_result_survives_usable_edit() {
        let mut form = CalorieForm::new();
        form.edit(FieldId::CaloriesPer100g, "200");
        form.edit(FieldId::WeightInGrams, "150");
        form.calculate();

        form.edit(FieldId::WeightInGrams, "15");
        assert_eq!(form.result(), Some(300.0));
    }

    #[test]
    fn test_form_result_cleared_when_input_unusable() {
        let mut form = CalorieForm::new();
        form.edit(FieldId::CaloriesPer100g, "200");
        form.edit(FieldId::WeightInGrams, "150");
        form.calculate();

        form.edit(FieldId::WeightInGrams, "");
        assert_eq!(form.result(), None);
    }

    #[test]
    fn test_form_rejection_leaves_result() {
        let mut form = CalorieForm::new();
        form.edit(FieldId::CaloriesPer100g, "200");
        form.edit(FieldId::WeightInGrams, "150");
        form.calculate();

        let outcome = form.edit(FieldId::WeightInGrams, "150x");
        assert!(outcome.is_rejected());
        assert_eq!(form.result(), Some(300.0));
        assert_eq!(
            form.field(FieldId::WeightInGrams).error().map(|e| e.kind),
            Some(ValidationError::InvalidFormat)
        );
        assert_eq!(form.field(FieldId::CaloriesPer100g).error(), None);
    }

    #[test]
    fn test_form_dismiss_targets_one_field() {
        let mut form = CalorieForm::new();
        let EditOutcome::Rejected(calories_error) = form.edit(FieldId::CaloriesPer100g, ".")
        else {
            panic!("expected rejection");
        };
        let EditOutcome::Rejected(weight_error) = form.edit(FieldId::WeightInGrams, "x") else {
            panic!("expected rejection");
        };

        assert!(form.dismiss_error(FieldId::CaloriesPer100g, calories_error.id));
        assert_eq!(form.field(FieldId::CaloriesPer100g).error(), None);
        assert_eq!(form.field(FieldId::WeightInGrams).error(), Some(weight_error));
    }

    proptest! {
        #[test]
        fn prop_compute_matches_formula(calories in 0u32..100_000, weight in 0u32..100_000) {
            let total = compute_total_calories(&calories.to_string(), &weight.to_string());
            let expected = (f64::from(calories) / 100.0) * f64::from(weight);
            prop_assert_eq!(total, Some(expected));
        }

        #[test]
        fn prop_format_has_zero_or_two_decimals(value in 0.0f64..100_000.0) {
            let text = format_total_calories(value);
            match text.split_once('.') {
                None => prop_assert_eq!(value.fract(), 0.0),
                Some((_, decimals)) => prop_assert_eq!(decimals.len(), 2),
            }
        }
    }
}
