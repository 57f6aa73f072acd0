//! Form state: the draft, the current field errors and the submit handler.

use super::draft::EmployeeDraft;
use super::error::ValidationErrors;
use super::field::FieldPath;
use super::schema;
use crate::error::Result;
use crate::models::{EmployeeRecord, ReferenceData};

/// Receives every record that passes validation.
pub trait SubmitHandler {
    fn submit(&mut self, record: EmployeeRecord);
}

impl<F> SubmitHandler for F
where
    F: FnMut(EmployeeRecord),
{
    fn submit(&mut self, record: EmployeeRecord) {
        (self)(record)
    }
}

/// Default handler: logs the submitted record.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn submit(&mut self, record: EmployeeRecord) {
        match record.to_json() {
            Ok(json) => tracing::info!(record = %json, "Employee record submitted"),
            Err(e) => tracing::warn!("Failed to serialize submitted record: {}", e),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was handed to the submit handler.
    Submitted,
    /// Validation failed; the handler was not called.
    Invalid(ValidationErrors),
}

/// A single employee data-entry form.
pub struct EmployeeForm {
    draft: EmployeeDraft,
    errors: ValidationErrors,
    reference: ReferenceData,
    handler: Box<dyn SubmitHandler>,
}

impl EmployeeForm {
    /// Create a pristine form.
    pub fn new(reference: ReferenceData, handler: impl SubmitHandler + 'static) -> Self {
        Self {
            draft: EmployeeDraft::default(),
            errors: ValidationErrors::new(),
            reference,
            handler: Box::new(handler),
        }
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Direct access for widgets bound to draft fields.
    ///
    /// Editing never validates and never touches the error set.
    pub fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Split borrow used by the UI: mutable draft, shared reference data and errors.
    pub fn parts_mut(&mut self) -> (&mut EmployeeDraft, &ReferenceData, &ValidationErrors) {
        (&mut self.draft, &self.reference, &self.errors)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message currently attached to a field.
    pub fn error(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    /// Update one draft value.
    pub fn set_field(&mut self, path: FieldPath, value: &str) {
        self.draft.set(path, value);
    }

    /// Update one draft value addressed by its dotted path.
    pub fn set_field_by_name(&mut self, path: &str, value: &str) -> Result<()> {
        let path: FieldPath = path.parse()?;
        self.set_field(path, value);
        Ok(())
    }

    /// Validate the draft and, when valid, pass the record to the handler.
    pub fn submit(&mut self) -> SubmitOutcome {
        match schema::validate(&self.draft, &self.reference) {
            Ok(record) => {
                self.errors.clear();
                tracing::debug!("Form valid, submitting record for {}", record.full_name());
                self.handler.submit(record);
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                tracing::debug!(
                    "Form invalid: {} field(s) [{}]",
                    errors.len(),
                    errors.paths().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
                );
                self.errors = errors.clone();
                SubmitOutcome::Invalid(errors)
            }
        }
    }
}

impl std::fmt::Debug for EmployeeForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeForm")
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}
