//! Validation result map

use crate::error::{ErrorKind, FieldError};
use crate::model::Field;

/// The field-name-to-message mapping produced by one validation pass.
///
/// At most one entry per field; entries keep the canonical field order for
/// stable display. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<FieldError>,
}

impl ErrorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. A later insert for the same field
    /// replaces the earlier entry.
    pub fn insert(&mut self, field: Field, kind: ErrorKind, message: impl Into<String>) {
        self.entries.retain(|e| e.field != field);
        self.entries.push(FieldError::new(field, kind, message));
    }

    /// The error for a field, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.entries.iter().find(|e| e.field == field)
    }

    /// The inline message for a field, if any.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Whether a field failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All errors, in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    /// The first error (if any), for focusing the offending input.
    pub fn first(&self) -> Option<&FieldError> {
        self.entries.first()
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
