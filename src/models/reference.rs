//! Reference data used to populate the select inputs.

use serde::{Deserialize, Serialize};

/// One selectable entry: an identifier and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption<K> {
    pub id: K,
    pub label: String,
}

impl<K> ReferenceOption<K> {
    pub fn new(id: K, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Lookup lists for gender, department and designation selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub genders: Vec<ReferenceOption<String>>,
    pub departments: Vec<ReferenceOption<i32>>,
    pub designations: Vec<ReferenceOption<i32>>,
}

impl ReferenceData {
    /// Whether `id` names a known gender.
    pub fn has_gender(&self, id: &str) -> bool {
        self.genders.iter().any(|g| g.id == id)
    }

    /// Whether `id` names a known department.
    pub fn has_department(&self, id: i32) -> bool {
        self.departments.iter().any(|d| d.id == id)
    }

    /// Whether `id` names a known designation.
    pub fn has_designation(&self, id: i32) -> bool {
        self.designations.iter().any(|d| d.id == id)
    }

    pub fn gender_label(&self, id: &str) -> Option<&str> {
        self.genders.iter().find(|g| g.id == id).map(|g| g.label.as_str())
    }

    pub fn department_label(&self, id: i32) -> Option<&str> {
        self.departments.iter().find(|d| d.id == id).map(|d| d.label.as_str())
    }

    pub fn designation_label(&self, id: i32) -> Option<&str> {
        self.designations.iter().find(|d| d.id == id).map(|d| d.label.as_str())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            genders: vec![
                ReferenceOption::new("Male".to_string(), "Male"),
                ReferenceOption::new("Female".to_string(), "Female"),
            ],
            departments: vec![ReferenceOption::new(1, "Dot Net"), ReferenceOption::new(2, "React")],
            designations: vec![ReferenceOption::new(1, "SSE"), ReferenceOption::new(2, "MR")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookups() {
        let data = ReferenceData::default();
        assert!(data.has_gender("Female"));
        assert!(!data.has_gender("female"));
        assert!(data.has_department(1));
        assert!(!data.has_department(0));
        assert!(data.has_designation(2));
        assert!(!data.has_designation(3));
    }

    #[test]
    fn test_labels() {
        let data = ReferenceData::default();
        assert_eq!(data.department_label(2), Some("React"));
        assert_eq!(data.designation_label(1), Some("SSE"));
        assert_eq!(data.gender_label("Male"), Some("Male"));
        assert_eq!(data.department_label(9), None);
    }
}
