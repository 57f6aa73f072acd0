//! Raw, not-yet-validated input state bound to the form controls.

use super::field::FieldPath;

/// Sentinel for an unselected numeric select.
pub const UNSELECTED: i32 = 0;

/// In-progress employee values exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub user_id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub father_name: String,
    pub email: String,
    pub date_of_birth: String,
    /// Selected gender id, empty when unselected.
    pub gender: String,
    pub marital_status: String,
    pub nationality: String,
    pub other_nationality: String,
    pub pan: String,
    pub aadhar: String,
    pub bank_account: String,
    pub spouse_name: String,
    pub nominee_name: String,
    pub nominee_relation: String,
    pub supervisor_id: String,
    pub mentor_id: String,
    pub default_reporting_manager: String,
    pub status: String,
    pub employee_status_code: String,
    pub employee_deactivation_reason_code: String,
    pub remarks: String,
    pub employment: EmploymentDraft,
}

/// In-progress employment values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmploymentDraft {
    pub employee_id: String,
    pub employment_id: String,
    pub date_of_joining: String,
    /// Selected department id, [`UNSELECTED`] when unselected.
    pub department_id: i32,
    /// Selected designation id, [`UNSELECTED`] when unselected.
    pub designation_id: i32,
    pub uan: String,
}

impl EmployeeDraft {
    /// Shared access to a text-backed field.
    ///
    /// Returns `None` for the numeric selects, which are stored as ids.
    pub fn text(&self, path: FieldPath) -> Option<&str> {
        let field = match path {
            FieldPath::FirstName => &self.first_name,
            FieldPath::MiddleName => &self.middle_name,
            FieldPath::LastName => &self.last_name,
            FieldPath::FatherName => &self.father_name,
            FieldPath::Email => &self.email,
            FieldPath::DateOfBirth => &self.date_of_birth,
            FieldPath::Gender => &self.gender,
            FieldPath::EmploymentEmployeeId => &self.employment.employee_id,
            FieldPath::EmploymentId => &self.employment.employment_id,
            FieldPath::DateOfJoining => &self.employment.date_of_joining,
            FieldPath::DepartmentId | FieldPath::DesignationId => return None,
            FieldPath::Uan => &self.employment.uan,
            FieldPath::EmployeeId => &self.employee_id,
            FieldPath::UserId => &self.user_id,
            FieldPath::MaritalStatus => &self.marital_status,
            FieldPath::Nationality => &self.nationality,
            FieldPath::OtherNationality => &self.other_nationality,
            FieldPath::Pan => &self.pan,
            FieldPath::Aadhar => &self.aadhar,
            FieldPath::BankAccount => &self.bank_account,
            FieldPath::SpouseName => &self.spouse_name,
            FieldPath::NomineeName => &self.nominee_name,
            FieldPath::NomineeRelation => &self.nominee_relation,
            FieldPath::SupervisorId => &self.supervisor_id,
            FieldPath::MentorId => &self.mentor_id,
            FieldPath::DefaultReportingManager => &self.default_reporting_manager,
            FieldPath::Status => &self.status,
            FieldPath::EmployeeStatusCode => &self.employee_status_code,
            FieldPath::EmployeeDeactivationReasonCode => &self.employee_deactivation_reason_code,
            FieldPath::Remarks => &self.remarks,
        };
        Some(field.as_str())
    }

    /// Mutable access to a text-backed field.
    ///
    /// Returns `None` for the numeric selects, which are stored as ids.
    pub fn text_mut(&mut self, path: FieldPath) -> Option<&mut String> {
        let field = match path {
            FieldPath::FirstName => &mut self.first_name,
            FieldPath::MiddleName => &mut self.middle_name,
            FieldPath::LastName => &mut self.last_name,
            FieldPath::FatherName => &mut self.father_name,
            FieldPath::Email => &mut self.email,
            FieldPath::DateOfBirth => &mut self.date_of_birth,
            FieldPath::Gender => &mut self.gender,
            FieldPath::EmploymentEmployeeId => &mut self.employment.employee_id,
            FieldPath::EmploymentId => &mut self.employment.employment_id,
            FieldPath::DateOfJoining => &mut self.employment.date_of_joining,
            FieldPath::DepartmentId | FieldPath::DesignationId => return None,
            FieldPath::Uan => &mut self.employment.uan,
            FieldPath::EmployeeId => &mut self.employee_id,
            FieldPath::UserId => &mut self.user_id,
            FieldPath::MaritalStatus => &mut self.marital_status,
            FieldPath::Nationality => &mut self.nationality,
            FieldPath::OtherNationality => &mut self.other_nationality,
            FieldPath::Pan => &mut self.pan,
            FieldPath::Aadhar => &mut self.aadhar,
            FieldPath::BankAccount => &mut self.bank_account,
            FieldPath::SpouseName => &mut self.spouse_name,
            FieldPath::NomineeName => &mut self.nominee_name,
            FieldPath::NomineeRelation => &mut self.nominee_relation,
            FieldPath::SupervisorId => &mut self.supervisor_id,
            FieldPath::MentorId => &mut self.mentor_id,
            FieldPath::DefaultReportingManager => &mut self.default_reporting_manager,
            FieldPath::Status => &mut self.status,
            FieldPath::EmployeeStatusCode => &mut self.employee_status_code,
            FieldPath::EmployeeDeactivationReasonCode => &mut self.employee_deactivation_reason_code,
            FieldPath::Remarks => &mut self.remarks,
        };
        Some(field)
    }

    /// Mutable access to a numeric select.
    pub fn select_mut(&mut self, path: FieldPath) -> Option<&mut i32> {
        match path {
            FieldPath::DepartmentId => Some(&mut self.employment.department_id),
            FieldPath::DesignationId => Some(&mut self.employment.designation_id),
            _ => None,
        }
    }

    /// Set a field from its raw input value.
    ///
    /// Numeric selects take the option id as text; anything that does not
    /// parse falls back to [`UNSELECTED`].
    pub fn set(&mut self, path: FieldPath, value: &str) {
        if let Some(id) = self.select_mut(path) {
            *id = value.trim().parse().unwrap_or(UNSELECTED);
        } else if let Some(text) = self.text_mut(path) {
            *text = value.to_string();
        }
    }

    /// Current raw value of a field as text.
    pub fn get(&self, path: FieldPath) -> String {
        match self.text(path) {
            Some(text) => text.to_string(),
            None => match path {
                FieldPath::DepartmentId => self.employment.department_id.to_string(),
                _ => self.employment.designation_id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_fields() {
        let mut draft = EmployeeDraft::default();
        draft.set(FieldPath::FirstName, "Asha");
        draft.set(FieldPath::Uan, "UAN123");
        draft.set(FieldPath::Remarks, "probation");
        assert_eq!(draft.first_name, "Asha");
        assert_eq!(draft.employment.uan, "UAN123");
        assert_eq!(draft.remarks, "probation");
    }

    #[test]
    fn test_set_employee_ids_are_distinct() {
        let mut draft = EmployeeDraft::default();
        draft.set(FieldPath::EmployeeId, "7");
        draft.set(FieldPath::EmploymentEmployeeId, "101");
        assert_eq!(draft.employee_id, "7");
        assert_eq!(draft.employment.employee_id, "101");
    }

    #[test]
    fn test_set_select_ids() {
        let mut draft = EmployeeDraft::default();
        draft.set(FieldPath::DepartmentId, "2");
        draft.set(FieldPath::DesignationId, " 1 ");
        assert_eq!(draft.employment.department_id, 2);
        assert_eq!(draft.employment.designation_id, 1);

        draft.set(FieldPath::DepartmentId, "none");
        assert_eq!(draft.employment.department_id, UNSELECTED);
    }

    #[test]
    fn test_get_every_path() {
        let mut draft = EmployeeDraft::default();
        for path in FieldPath::all() {
            let value = match path {
                FieldPath::DepartmentId | FieldPath::DesignationId => "2".to_string(),
                _ => format!("v-{}", path.as_str()),
            };
            draft.set(path, &value);
            assert_eq!(draft.get(path), value);
        }
    }
}
