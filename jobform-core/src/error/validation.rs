//! Validation error types

use crate::model::Field;

/// Why a field failed validation.
///
/// Every failure in this form is a validation failure; there is no I/O and
/// no recoverable/fatal split beyond "invalid input".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A required field was left empty.
    #[error("missing required field")]
    MissingRequiredField,

    /// The value does not match the expected shape (email, URL).
    #[error("invalid format")]
    InvalidFormat,

    /// The value is not interpretable as a number.
    #[error("invalid number")]
    InvalidNumeric,

    /// The value parsed but falls outside the allowed range.
    #[error("value out of range")]
    OutOfRange,

    /// A selection field (position, skills, interview time) has nothing
    /// chosen.
    #[error("empty selection")]
    EmptySelection,
}

/// Error information for a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: Field,
    /// The failure category.
    pub kind: ErrorKind,
    /// Human-readable message, rendered inline beside the input.
    pub message: String,
}

impl FieldError {
    /// Creates a new field validation error.
    pub fn new(field: Field, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
