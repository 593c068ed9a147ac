//! Keypad-driven four-function calculator.
//!
//! The calculator keeps the operand being typed as text so that partial input
//! such as `"-"` or `"3."` can be shown as-is. Operands are parsed only when an
//! operation is evaluated.

use std::fmt::{self, Display};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
}

impl Operator {
    /// Returns the keypad symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalculatorError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalculatorError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKey {
    /// A digit 0-9.
    Digit(u8),
    /// The decimal point.
    Point,
    /// Clears all input and the pending operation.
    Clear,
    /// Toggles a leading minus sign on the current input.
    ToggleSign,
    /// Divides the current input by 100.
    Percent,
    /// Removes the last character of the current input.
    Delete,
    /// Starts (or chains) a binary operation.
    Operator(Operator),
    /// Evaluates the pending operation.
    Equals,
}

impl CalculatorKey {
    /// The keypad layout, four keys per row.
    pub const KEYPAD: [Self; 20] = [
        Self::Clear,
        Self::ToggleSign,
        Self::Percent,
        Self::Operator(Operator::Divide),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Operator(Operator::Multiply),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Operator(Operator::Subtract),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Operator(Operator::Add),
        Self::Digit(0),
        Self::Point,
        Self::Delete,
        Self::Equals,
    ];

    /// Number of keys per keypad row.
    pub const KEYPAD_COLUMNS: usize = 4;

    /// Returns the label printed on the key.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Point => ".".to_owned(),
            Self::Clear => "C".to_owned(),
            Self::ToggleSign => "+/-".to_owned(),
            Self::Percent => "%".to_owned(),
            Self::Delete => "Del".to_owned(),
            Self::Operator(op) => op.symbol().to_owned(),
            Self::Equals => "=".to_owned(),
        }
    }

    /// Returns `true` for operator and equals keys, which are drawn highlighted.
    #[must_use]
    pub const fn is_operation(self) -> bool {
        matches!(self, Self::Operator(_) | Self::Equals)
    }
}

/// An error produced while evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CalculatorError {
    /// The right-hand operand of a division was zero.
    #[display("Division by zero")]
    DivisionByZero,
    /// An operand could not be read as a number.
    #[display("Invalid Input")]
    InvalidInput,
}

/// State of the four-function calculator screen.
///
/// # Examples
///
/// ```
/// use calorie_core::{CalculatorKey, CalculatorState, Operator};
///
/// let mut calc = CalculatorState::new();
/// for key in [
///     CalculatorKey::Digit(1),
///     CalculatorKey::Digit(2),
///     CalculatorKey::Operator(Operator::Multiply),
///     CalculatorKey::Digit(3),
///     CalculatorKey::Equals,
/// ] {
///     calc.press(key);
/// }
/// assert_eq!(calc.display(), "36");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    previous: String,
    operator: Option<Operator>,
    error: Option<CalculatorError>,
}

impl CalculatorState {
    /// Creates a calculator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text for the main display.
    ///
    /// Shows the last error if the previous key failed, otherwise the current
    /// input, or `"0"` when there is none.
    #[must_use]
    pub fn display(&self) -> String {
        if let Some(error) = self.error {
            return error.to_string();
        }
        if self.current.is_empty() {
            "0".to_owned()
        } else {
            self.current.clone()
        }
    }

    /// Returns the pending left-hand operand and operator, e.g. `"12 *"`.
    #[must_use]
    pub fn pending(&self) -> Option<String> {
        if self.previous.is_empty() {
            return None;
        }
        Some(match self.operator {
            Some(op) => format!("{} {op}", self.previous),
            None => self.previous.clone(),
        })
    }

    /// Returns the error raised by the last key, if any.
    #[must_use]
    pub fn error(&self) -> Option<CalculatorError> {
        self.error
    }

    /// Applies a key press.
    pub fn press(&mut self, key: CalculatorKey) {
        self.error = None;
        match key {
            CalculatorKey::Clear => *self = Self::default(),
            CalculatorKey::ToggleSign => {
                if let Some(rest) = self.current.strip_prefix('-') {
                    self.current = rest.to_owned();
                } else {
                    self.current.insert(0, '-');
                }
            }
            CalculatorKey::Percent => self.percent(),
            CalculatorKey::Delete => {
                self.current.pop();
            }
            CalculatorKey::Operator(op) => self.start_operation(op),
            CalculatorKey::Equals => self.evaluate(),
            CalculatorKey::Digit(digit) => {
                if let Some(ch) = char::from_digit(u32::from(digit), 10) {
                    self.current.push(ch);
                }
            }
            CalculatorKey::Point => self.current.push('.'),
        }
    }

    fn percent(&mut self) {
        if self.current.is_empty() {
            "0".clone_into(&mut self.current);
            return;
        }
        match parse_operand(&self.current) {
            Ok(value) => self.current = format_number(value / 100.0),
            Err(err) => self.fail(err),
        }
    }

    fn start_operation(&mut self, op: Operator) {
        if self.current.is_empty() {
            return;
        }
        if self.previous.is_empty() {
            self.previous = std::mem::take(&mut self.current);
        } else {
            match calculate(&self.previous, &self.current, self.operator) {
                Ok(result) => {
                    self.previous = result;
                    self.current.clear();
                }
                Err(err) => {
                    self.fail(err);
                    return;
                }
            }
        }
        self.operator = Some(op);
    }

    fn evaluate(&mut self) {
        if self.current.is_empty() || self.previous.is_empty() {
            return;
        }
        match calculate(&self.previous, &self.current, self.operator) {
            Ok(result) => {
                self.current = result;
                self.previous.clear();
                self.operator = None;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, error: CalculatorError) {
        log::debug!("calculator error: {error}");
        *self = Self {
            error: Some(error),
            ..Self::default()
        };
    }
}

/// Evaluates `lhs op rhs` on operand text.
///
/// Without an operator the left-hand operand is returned unchanged.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidInput`] if an operand is not a number and
/// [`CalculatorError::DivisionByZero`] when dividing by zero.
pub fn calculate(lhs: &str, rhs: &str, op: Option<Operator>) -> Result<String, CalculatorError> {
    let left = parse_operand(lhs)?;
    let right = parse_operand(rhs)?;
    match op {
        Some(op) => op.apply(left, right).map(format_number),
        None => Ok(lhs.to_owned()),
    }
}

fn parse_operand(text: &str) -> Result<f64, CalculatorError> {
    let value: f64 = text.parse().map_err(|_| CalculatorError::InvalidInput)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::InvalidInput)
    }
}

fn format_number(value: f64) -> String {
    value.to_string()
}
