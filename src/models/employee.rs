//! Validated employee record passed to the submit handler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Employee record produced by a successful form validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub employee_id: Option<i32>,
    pub user_id: Option<i32>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub father_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub marital_status: Option<String>,
    pub nationality: Option<String>,
    pub other_nationality: Option<String>,
    pub pan: Option<String>,
    pub aadhar: Option<String>,
    pub bank_account: Option<String>,
    pub spouse_name: Option<String>,
    pub nominee_name: Option<String>,
    pub nominee_relation: Option<String>,
    pub supervisor_id: Option<i32>,
    pub mentor_id: Option<i32>,
    pub default_reporting_manager: Option<i32>,
    pub status: Option<String>,
    pub employee_status_code: Option<String>,
    pub employee_deactivation_reason_code: Option<String>,
    pub remarks: Option<String>,
    pub employment: EmploymentRecord,
}

/// Employment details nested in every employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    pub employee_id: i32,
    pub employment_id: i32,
    pub date_of_joining: NaiveDate,
    pub department_id: i32,
    pub designation_id: i32,
    pub uan: String,
}

impl EmployeeRecord {
    /// Full display name, skipping a missing middle name.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Serialize to a single-line JSON object with camelCase keys.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
