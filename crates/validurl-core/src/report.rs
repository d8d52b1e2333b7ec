//! Per-field error collection for form-style callers.
//!
//! The validator itself only returns a `Result`; this is one possible sink,
//! keyed by field name in the order fields were first reported.

use crate::validate::{InvalidUrl, UrlValidator};

/// Messages collected per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` under `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    /// Messages for `field`, if any were recorded.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

/// Validates `value` and records the failure message under `field`.
///
/// Returns the validation outcome so callers can also branch on it.
pub fn validate_field(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    validator: &UrlValidator<'_>,
) -> Result<(), InvalidUrl> {
    let result = validator.validate(value);
    if let Err(err) = &result {
        errors.add(field, err.message());
    }
    result
}
