//! Employee data-entry form: draft state, field paths and validation schema.
//!
//! Edits go into an [`EmployeeDraft`] without validation. [`EmployeeForm::submit`]
//! validates the whole draft; failures are attached to their fields, a valid
//! draft becomes an [`EmployeeRecord`](crate::models::EmployeeRecord) handed to
//! the [`SubmitHandler`].
//!
//! # Example
//!
//! ```ignore
//! use employee_form::form::{EmployeeForm, FieldPath, SubmitOutcome};
//! use employee_form::models::{EmployeeRecord, ReferenceData};
//!
//! let mut form = EmployeeForm::new(ReferenceData::default(), |record: EmployeeRecord| println!("{record:?}"));
//! form.set_field(FieldPath::FirstName, "Asha");
//! if let SubmitOutcome::Invalid(errors) = form.submit() {
//!     for error in errors.iter() {
//!         println!("{error}");
//!     }
//! }
//! ```

mod draft;
mod error;
mod field;
mod schema;
mod state;


pub use draft::{EmployeeDraft, EmploymentDraft, UNSELECTED};
pub use error::{FieldError, ValidationErrors};
pub use field::{FieldKind, FieldPath};
pub use schema::{DATE_FORMATS, parse_flexible_date, validate};
pub use state::{EmployeeForm, LogSubmitHandler, SubmitHandler, SubmitOutcome};
