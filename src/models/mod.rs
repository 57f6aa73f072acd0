//! Data models for employee records and form reference data.

pub mod employee;
pub mod reference;

pub use employee::{EmployeeRecord, EmploymentRecord};
pub use reference::{ReferenceData, ReferenceOption};
