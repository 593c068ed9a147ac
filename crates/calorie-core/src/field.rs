//! A numeric text field and the error currently shown for it.

use crate::validation::{ValidationError, validate_edit};

/// Identifies one shown error instance of a field.
///
/// Every rejection produces a new id, so a delayed dismissal armed for an
/// older error cannot clear a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorId(u64);

impl ErrorId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// An error currently attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Which error instance this is.
    pub id: ErrorId,
    /// Why the last edit was rejected.
    pub kind: ValidationError,
}

/// Result of applying an edit to a [`NumericField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditOutcome {
    /// The value was stored. `cleared` holds the error that was removed, if any.
    Accepted {
        /// The error removed by this edit.
        cleared: Option<ErrorId>,
    },
    /// The value was left unchanged and a new error was attached.
    Rejected(FieldError),
}

/// A user-editable numeric text value with its transient error.
///
/// The stored value always satisfies [`validate_edit`] against the value it
/// replaced, so it matches `digits* ('.' digits*)?` and is at most
/// [`MAX_INPUT_LENGTH`](crate::MAX_INPUT_LENGTH) characters long.
///
/// # Examples
///
/// ```
/// use calorie_core::{NumericField, ValidationError};
///
/// let mut field = NumericField::new();
/// assert!(field.edit("12").is_accepted());
/// assert!(field.edit("12x").is_rejected());
///
/// assert_eq!(field.value(), "12");
/// assert_eq!(field.error().map(|e| e.kind), Some(ValidationError::InvalidFormat));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField {
    value: String,
    error: Option<FieldError>,
    next_error_id: u64,
}

impl NumericField {
    /// Creates an empty field without an error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accepted text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the error currently shown for this field.
    #[must_use]
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Validates `proposed` against the current value and applies it.
    ///
    /// On acceptance the value is replaced and any error is cleared. On
    /// rejection the value is kept and a fresh error replaces the old one.
    pub fn edit(&mut self, proposed: &str) -> EditOutcome {
        match validate_edit(&self.value, proposed) {
            Ok(()) => {
                proposed.clone_into(&mut self.value);
                let cleared = self.error.take().map(|error| error.id);
                EditOutcome::Accepted { cleared }
            }
            Err(kind) => {
                let id = ErrorId(self.next_error_id);
                self.next_error_id += 1;
                let error = FieldError { id, kind };
                self.error = Some(error);
                EditOutcome::Rejected(error)
            }
        }
    }

    /// Clears the error if it is still the instance identified by `id`.
    ///
    /// Returns `true` if an error was removed.
    pub fn dismiss_error(&mut self, id: ErrorId) -> bool {
        if self.error.is_some_and(|error| error.id == id) {
            self.error = None;
            true
        } else {
            false
        }
    }
}
