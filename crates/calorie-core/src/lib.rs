//! Core logic for the Calorie Counter application.
//!
//! This crate holds everything that can be expressed without a UI toolkit:
//! input validation, calorie arithmetic, result formatting, the four-function
//! calculator, placeholder food detection, and camera frame conversion.
//!
//! # Overview
//!
//! 1. **Weight-based calorie calculator**
//!    - [`numeric_text`]: the accepted decimal text pattern and parsing
//!    - [`validation`]: keystroke validation rules and [`ValidationError`]
//!    - [`field`]: a numeric text field with its transient error
//!    - [`calorie`]: total calorie computation, formatting and [`CalorieForm`]
//!
//! 2. **Other screens**
//!    - [`calculator`]: keypad-driven four-function calculator
//!    - [`detection`]: placeholder food detection
//!    - [`frame`]: NV21 camera frames to RGB images and JPEG bytes
//!
//! # Examples
//!
//! ```
//! use calorie_core::{CalorieForm, FieldId, format_total_calories};
//!
//! let mut form = CalorieForm::new();
//! form.edit(FieldId::CaloriesPer100g, "200");
//! form.edit(FieldId::WeightInGrams, "150");
//!
//! let total = form.calculate().unwrap();
//! assert_eq!(format_total_calories(total), "300");
//! ```

pub mod calculator;
pub mod calorie;
pub mod detection;
pub mod field;
pub mod frame;
pub mod numeric_text;
pub mod validation;

// Re-export commonly used types
pub use self::{
    calculator::{CalculatorError, CalculatorKey, CalculatorState, Operator},
    calorie::{CalorieForm, FieldId, compute_total_calories, format_total_calories},
    detection::{Detection, FOOD_CATALOG, FoodDetector, FoodGuess, PlaceholderDetector},
    field::{EditOutcome, ErrorId, FieldError, NumericField},
    frame::{FrameError, Nv21Frame, encode_jpeg},
    numeric_text::MAX_INPUT_LENGTH,
    validation::{ValidationError, validate_edit},
};
