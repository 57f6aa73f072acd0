//! Validation schema for the employee form.
//!
//! Every field has one rule function; [`validate`] runs them all against a
//! draft and either assembles a typed [`EmployeeRecord`] or returns every
//! failing field with its message. Only the first failing rule of a field is
//! reported.

use chrono::NaiveDate;
use validator::ValidateEmail;

use super::draft::{EmployeeDraft, UNSELECTED};
use super::error::ValidationErrors;
use super::field::FieldPath;
use crate::models::{EmployeeRecord, EmploymentRecord, ReferenceData};

/// Date formats accepted by the date inputs.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Parse date input flexibly, accepting multiple formats.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for fmt in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    None
}

type Rule<T> = std::result::Result<T, String>;

fn required_text(value: &str, message: &str) -> Rule<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(message.to_string());
    }
    Ok(value.to_string())
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn valid_email(value: &str) -> Rule<String> {
    let value = required_text(value, "Email is required")?;
    if !value.validate_email() {
        return Err("Invalid email".to_string());
    }
    Ok(value)
}

fn required_date(value: &str, message: &str) -> Rule<NaiveDate> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    parse_flexible_date(value).ok_or_else(|| "Invalid date".to_string())
}

/// Positive integer typed into a number input.
fn required_id(value: &str, message: &str) -> Rule<i32> {
    match value.trim().parse::<i32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(message.to_string()),
    }
}

fn optional_id(value: &str, path: FieldPath) -> Rule<Option<i32>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("{} must be a whole number", path.as_str()))
}

fn known_gender(value: &str, reference: &ReferenceData) -> Rule<String> {
    let value = required_text(value, "gender is required")?;
    if !reference.has_gender(&value) {
        return Err("gender is not a known option".to_string());
    }
    Ok(value)
}

/// Numeric select whose id must be chosen and present in the lookup list.
fn selected_id(id: i32, name: &str, known: impl Fn(i32) -> bool, kind: &str) -> Rule<i32> {
    if id <= UNSELECTED {
        return Err(format!("{name} is required"));
    }
    if !known(id) {
        return Err(format!("{name} is not a known {kind}"));
    }
    Ok(id)
}

/// Collects rule failures while the draft is being converted.
struct Checker {
    errors: ValidationErrors,
}

impl Checker {
    fn check<T>(&mut self, path: FieldPath, result: Rule<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.errors.add(path, message);
                None
            }
        }
    }
}

/// Validate a draft against the schema.
///
/// On success the returned record holds trimmed strings, parsed dates and
/// parsed ids. On failure every invalid field carries exactly one message.
pub fn validate(draft: &EmployeeDraft, reference: &ReferenceData) -> Result<EmployeeRecord, ValidationErrors> {
    let mut c = Checker {
        errors: ValidationErrors::new(),
    };
    let job = &draft.employment;

    let first_name = c.check(FieldPath::FirstName, required_text(&draft.first_name, "first name is required"));
    let last_name = c.check(FieldPath::LastName, required_text(&draft.last_name, "last name is required"));
    let father_name = c.check(
        FieldPath::FatherName,
        required_text(&draft.father_name, "Father's name is required"),
    );
    let email = c.check(FieldPath::Email, valid_email(&draft.email));
    let date_of_birth = c.check(
        FieldPath::DateOfBirth,
        required_date(&draft.date_of_birth, "date of birth is required"),
    );
    let gender = c.check(FieldPath::Gender, known_gender(&draft.gender, reference));

    let employment_employee_id = c.check(
        FieldPath::EmploymentEmployeeId,
        required_id(&job.employee_id, "employeeId is required"),
    );
    let employment_id = c.check(
        FieldPath::EmploymentId,
        required_id(&job.employment_id, "employmentId is required"),
    );
    let date_of_joining = c.check(
        FieldPath::DateOfJoining,
        required_date(&job.date_of_joining, "date of joining is required"),
    );
    let department_id = c.check(
        FieldPath::DepartmentId,
        selected_id(
            job.department_id,
            "departmentId",
            |id| reference.has_department(id),
            "department",
        ),
    );
    let designation_id = c.check(
        FieldPath::DesignationId,
        selected_id(
            job.designation_id,
            "designationId",
            |id| reference.has_designation(id),
            "designation",
        ),
    );
    let uan = c.check(FieldPath::Uan, required_text(&job.uan, "uan is required"));

    let employee_id = c.check(FieldPath::EmployeeId, optional_id(&draft.employee_id, FieldPath::EmployeeId));
    let user_id = c.check(FieldPath::UserId, optional_id(&draft.user_id, FieldPath::UserId));
    let supervisor_id = c.check(
        FieldPath::SupervisorId,
        optional_id(&draft.supervisor_id, FieldPath::SupervisorId),
    );
    let mentor_id = c.check(FieldPath::MentorId, optional_id(&draft.mentor_id, FieldPath::MentorId));
    let default_reporting_manager = c.check(
        FieldPath::DefaultReportingManager,
        optional_id(&draft.default_reporting_manager, FieldPath::DefaultReportingManager),
    );

    if !c.errors.is_empty() {
        return Err(c.errors);
    }

    let record = (|| {
        Some(EmployeeRecord {
            employee_id: employee_id?,
            user_id: user_id?,
            first_name: first_name?,
            middle_name: optional_text(&draft.middle_name),
            last_name: last_name?,
            father_name: father_name?,
            email: email?,
            date_of_birth: date_of_birth?,
            gender: gender?,
            marital_status: optional_text(&draft.marital_status),
            nationality: optional_text(&draft.nationality),
            other_nationality: optional_text(&draft.other_nationality),
            pan: optional_text(&draft.pan),
            aadhar: optional_text(&draft.aadhar),
            bank_account: optional_text(&draft.bank_account),
            spouse_name: optional_text(&draft.spouse_name),
            nominee_name: optional_text(&draft.nominee_name),
            nominee_relation: optional_text(&draft.nominee_relation),
            supervisor_id: supervisor_id?,
            mentor_id: mentor_id?,
            default_reporting_manager: default_reporting_manager?,
            status: optional_text(&draft.status),
            employee_status_code: optional_text(&draft.employee_status_code),
            employee_deactivation_reason_code: optional_text(&draft.employee_deactivation_reason_code),
            remarks: optional_text(&draft.remarks),
            employment: EmploymentRecord {
                employee_id: employment_employee_id?,
                employment_id: employment_id?,
                date_of_joining: date_of_joining?,
                department_id: department_id?,
                designation_id: designation_id?,
                uan: uan?,
            },
        })
    })();

    record.ok_or(c.errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flexible_date() {
        let expected = NaiveDate::from_ymd_opt(1990, 5, 1);
        assert_eq!(parse_flexible_date("1990-05-01"), expected);
        assert_eq!(parse_flexible_date("1990/05/01"), expected);
        assert_eq!(parse_flexible_date(" 1990.05.01 "), expected);
        assert_eq!(parse_flexible_date("01-05-1990"), None);
        assert_eq!(parse_flexible_date("1990-02-30"), None);
        assert_eq!(parse_flexible_date(""), None);
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("  Asha ", "msg"), Ok("Asha".to_string()));
        assert_eq!(required_text("   ", "msg"), Err("msg".to_string()));
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(valid_email("a@b.com"), Ok("a@b.com".to_string()));
        assert_eq!(valid_email("not-an-email"), Err("Invalid email".to_string()));
        assert_eq!(valid_email(""), Err("Email is required".to_string()));
    }

    #[test]
    fn test_required_date_rule() {
        assert_eq!(required_date("", "required"), Err("required".to_string()));
        assert_eq!(required_date("yesterday", "required"), Err("Invalid date".to_string()));
        assert!(required_date("2020-01-15", "required").is_ok());
    }

    #[test]
    fn test_required_id_rule() {
        assert_eq!(required_id("101", "msg"), Ok(101));
        assert!(required_id("0", "msg").is_err());
        assert!(required_id("-4", "msg").is_err());
        assert!(required_id("", "msg").is_err());
        assert!(required_id("1.5", "msg").is_err());
    }

    #[test]
    fn test_optional_id_rule() {
        assert_eq!(optional_id("", FieldPath::MentorId), Ok(None));
        assert_eq!(optional_id(" 12 ", FieldPath::MentorId), Ok(Some(12)));
        assert_eq!(
            optional_id("twelve", FieldPath::MentorId),
            Err("mentorId must be a whole number".to_string())
        );
    }

    #[test]
    fn test_selected_id_rule() {
        let reference = ReferenceData::default();
        let known = |id| reference.has_department(id);
        assert_eq!(
            selected_id(0, "departmentId", known, "department"),
            Err("departmentId is required".to_string())
        );
        assert_eq!(
            selected_id(7, "departmentId", known, "department"),
            Err("departmentId is not a known department".to_string())
        );
        assert_eq!(selected_id(1, "departmentId", known, "department"), Ok(1));
    }

    #[test]
    fn test_gender_rule() {
        let reference = ReferenceData::default();
        assert_eq!(known_gender("Female", &reference), Ok("Female".to_string()));
        assert_eq!(known_gender("", &reference), Err("gender is required".to_string()));
        assert_eq!(
            known_gender("Unknown", &reference),
            Err("gender is not a known option".to_string())
        );
    }
}
