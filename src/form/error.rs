//! Field validation error types.

use std::collections::BTreeMap;

use thiserror::Error;

use super::field::FieldPath;

/// A single failed validation rule, attached to its field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {message}")]
pub struct FieldError {
    pub path: FieldPath,
    pub message: String,
}

/// All field errors from one validation pass, ordered by field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field. The first message for a field wins.
    pub fn add(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.entry(path).or_insert_with(|| message.into());
    }

    /// Message attached to a field, if any.
    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.errors.contains_key(&path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Invalid fields in render order.
    pub fn paths(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.errors.keys().copied()
    }

    /// Iterate over the errors as [`FieldError`] values.
    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().map(|(path, message)| FieldError {
            path: *path,
            message: message.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.add(error.path, error.message);
        }
        errors
    }
}
