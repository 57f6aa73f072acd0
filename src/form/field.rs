//! Field paths addressing every leaf of the employee draft.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Kind of input control a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    Select,
}

/// A leaf field of the employee form.
///
/// Declaration order is the order fields are rendered and errors reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    FirstName,
    MiddleName,
    LastName,
    FatherName,
    Email,
    DateOfBirth,
    Gender,
    EmploymentEmployeeId,
    EmploymentId,
    DateOfJoining,
    DepartmentId,
    DesignationId,
    Uan,
    EmployeeId,
    UserId,
    MaritalStatus,
    Nationality,
    OtherNationality,
    Pan,
    Aadhar,
    BankAccount,
    SpouseName,
    NomineeName,
    NomineeRelation,
    SupervisorId,
    MentorId,
    DefaultReportingManager,
    Status,
    EmployeeStatusCode,
    EmployeeDeactivationReasonCode,
    Remarks,
}

impl FieldPath {
    /// Fields covered by the validation schema, in render order.
    pub const PRIMARY: [FieldPath; 13] = [
        FieldPath::FirstName,
        FieldPath::MiddleName,
        FieldPath::LastName,
        FieldPath::FatherName,
        FieldPath::Email,
        FieldPath::DateOfBirth,
        FieldPath::Gender,
        FieldPath::EmploymentEmployeeId,
        FieldPath::EmploymentId,
        FieldPath::DateOfJoining,
        FieldPath::DepartmentId,
        FieldPath::DesignationId,
        FieldPath::Uan,
    ];

    /// Optional record fields shown under "Additional details".
    pub const ADDITIONAL: [FieldPath; 18] = [
        FieldPath::EmployeeId,
        FieldPath::UserId,
        FieldPath::MaritalStatus,
        FieldPath::Nationality,
        FieldPath::OtherNationality,
        FieldPath::Pan,
        FieldPath::Aadhar,
        FieldPath::BankAccount,
        FieldPath::SpouseName,
        FieldPath::NomineeName,
        FieldPath::NomineeRelation,
        FieldPath::SupervisorId,
        FieldPath::MentorId,
        FieldPath::DefaultReportingManager,
        FieldPath::Status,
        FieldPath::EmployeeStatusCode,
        FieldPath::EmployeeDeactivationReasonCode,
        FieldPath::Remarks,
    ];

    /// Iterate over every field path.
    pub fn all() -> impl Iterator<Item = FieldPath> {
        Self::PRIMARY.into_iter().chain(Self::ADDITIONAL)
    }

    /// Dotted path as used in error reports, e.g. `employment.departmentId`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::FirstName => "firstName",
            FieldPath::MiddleName => "middleName",
            FieldPath::LastName => "lastName",
            FieldPath::FatherName => "fatherName",
            FieldPath::Email => "email",
            FieldPath::DateOfBirth => "dateOfBirth",
            FieldPath::Gender => "gender",
            FieldPath::EmploymentEmployeeId => "employment.employeeId",
            FieldPath::EmploymentId => "employment.employmentId",
            FieldPath::DateOfJoining => "employment.dateOfJoining",
            FieldPath::DepartmentId => "employment.departmentId",
            FieldPath::DesignationId => "employment.designationId",
            FieldPath::Uan => "employment.uan",
            FieldPath::EmployeeId => "employeeId",
            FieldPath::UserId => "userId",
            FieldPath::MaritalStatus => "maritalStatus",
            FieldPath::Nationality => "nationality",
            FieldPath::OtherNationality => "otherNationality",
            FieldPath::Pan => "pan",
            FieldPath::Aadhar => "aadhar",
            FieldPath::BankAccount => "bankAccount",
            FieldPath::SpouseName => "spouseName",
            FieldPath::NomineeName => "nomineeName",
            FieldPath::NomineeRelation => "nomineeRelation",
            FieldPath::SupervisorId => "supervisorId",
            FieldPath::MentorId => "mentorId",
            FieldPath::DefaultReportingManager => "defaultReportingManager",
            FieldPath::Status => "status",
            FieldPath::EmployeeStatusCode => "employeeStatusCode",
            FieldPath::EmployeeDeactivationReasonCode => "employeeDeactivationReasonCode",
            FieldPath::Remarks => "remarks",
        }
    }

    /// Label rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldPath::FirstName => "First Name",
            FieldPath::MiddleName => "Middle Name",
            FieldPath::LastName => "Last Name",
            FieldPath::FatherName => "Father Name",
            FieldPath::Email => "Email",
            FieldPath::DateOfBirth => "Date of Birth",
            FieldPath::Gender => "Gender",
            FieldPath::EmploymentEmployeeId => "Employee Id",
            FieldPath::EmploymentId => "Employment Id",
            FieldPath::DateOfJoining => "Date of Joining",
            FieldPath::DepartmentId => "Department",
            FieldPath::DesignationId => "Designation",
            FieldPath::Uan => "UAN",
            FieldPath::EmployeeId => "Employee Number",
            FieldPath::UserId => "User Id",
            FieldPath::MaritalStatus => "Marital Status",
            FieldPath::Nationality => "Nationality",
            FieldPath::OtherNationality => "Other Nationality",
            FieldPath::Pan => "PAN",
            FieldPath::Aadhar => "Aadhar",
            FieldPath::BankAccount => "Bank Account",
            FieldPath::SpouseName => "Spouse Name",
            FieldPath::NomineeName => "Nominee Name",
            FieldPath::NomineeRelation => "Nominee Relation",
            FieldPath::SupervisorId => "Supervisor Id",
            FieldPath::MentorId => "Mentor Id",
            FieldPath::DefaultReportingManager => "Default Reporting Manager",
            FieldPath::Status => "Status",
            FieldPath::EmployeeStatusCode => "Employee Status Code",
            FieldPath::EmployeeDeactivationReasonCode => "Deactivation Reason Code",
            FieldPath::Remarks => "Remarks",
        }
    }

    /// Input control this field renders as.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldPath::Email => FieldKind::Email,
            FieldPath::DateOfBirth | FieldPath::DateOfJoining => FieldKind::Date,
            FieldPath::Gender | FieldPath::DepartmentId | FieldPath::DesignationId => FieldKind::Select,
            FieldPath::EmploymentEmployeeId
            | FieldPath::EmploymentId
            | FieldPath::EmployeeId
            | FieldPath::UserId
            | FieldPath::SupervisorId
            | FieldPath::MentorId
            | FieldPath::DefaultReportingManager => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field lives in the nested employment record.
    pub fn is_employment(&self) -> bool {
        self.as_str().starts_with("employment.")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::all()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for path in FieldPath::all() {
            assert_eq!(path.as_str().parse::<FieldPath>().unwrap(), path);
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut names: Vec<_> = FieldPath::all().map(|p| p.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 31);
    }

    #[test]
    fn test_unknown_path() {
        let err = "employment.salary".parse::<FieldPath>().unwrap_err();
        assert!(matches!(err, AppError::UnknownField(ref p) if p == "employment.salary"));
    }

    #[test]
    fn test_employment_paths() {
        assert!(FieldPath::DepartmentId.is_employment());
        assert!(FieldPath::EmploymentEmployeeId.is_employment());
        assert!(!FieldPath::EmployeeId.is_employment());
        assert_eq!(FieldPath::DepartmentId.to_string(), "employment.departmentId");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FieldPath::Email.kind(), FieldKind::Email);
        assert_eq!(FieldPath::DateOfJoining.kind(), FieldKind::Date);
        assert_eq!(FieldPath::DesignationId.kind(), FieldKind::Select);
        assert_eq!(FieldPath::MentorId.kind(), FieldKind::Number);
        assert_eq!(FieldPath::Uan.kind(), FieldKind::Text);
    }
}
