//! Analysis configuration
//!
//! Declares which columns carry the attrition signal and the department,
//! which columns are identifiers, and the thresholds and limits used by the
//! classifier and the engine. The defaults match the IBM HR attrition
//! dataset layout.

use attrix_core::{Error, Record, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum share of numeric-like cells for a column to be a feature
pub const DEFAULT_NUMERIC_THRESHOLD: f64 = 0.70;

/// Number of department summaries reported
pub const DEFAULT_MAX_DEPARTMENTS: usize = 5;

/// Number of nearest neighbors reported
pub const DEFAULT_MAX_NEIGHBORS: usize = 10;

/// Label used when a record has no department
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Inclusive ratio of numeric-like cells required for a feature column
    pub numeric_threshold: f64,

    /// Identifier-style column names, compared lower-cased
    pub excluded_columns: Vec<String>,

    /// Candidate names of the attrition column, matched case-insensitively
    pub attrition_columns: Vec<String>,

    /// Candidate names of the department column, matched case-insensitively
    pub department_columns: Vec<String>,

    /// Attrition values (case-insensitive) meaning "this employee left"
    pub positive_attrition: Vec<String>,

    pub unknown_department: String,

    pub max_departments: usize,

    pub max_neighbors: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            numeric_threshold: DEFAULT_NUMERIC_THRESHOLD,
            excluded_columns: ["employeenumber", "employeeid", "employee_id", "id"]
                .into_iter()
                .map(String::from)
                .collect(),
            attrition_columns: vec!["Attrition".to_string()],
            department_columns: vec!["Department".to_string(), "Dept".to_string()],
            positive_attrition: ["yes", "1", "true"].into_iter().map(String::from).collect(),
            unknown_department: UNKNOWN_DEPARTMENT.to_string(),
            max_departments: DEFAULT_MAX_DEPARTMENTS,
            max_neighbors: DEFAULT_MAX_NEIGHBORS,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration
    /// - threshold must lie in [0, 1]
    /// - excluded and positive tokens are lower-cased for comparison
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.numeric_threshold) {
            return Err(Error::InvalidConfig(format!(
                "numeric_threshold must be within [0, 1], got {}",
                self.numeric_threshold
            )));
        }
        if self.attrition_columns.is_empty() {
            return Err(Error::InvalidConfig("at least one attrition column name is required".into()));
        }

        for name in &mut self.excluded_columns {
            *name = name.to_lowercase();
        }
        for token in &mut self.positive_attrition {
            *token = token.to_lowercase();
        }

        Ok(())
    }

    /// Whether a column name is on the identifier exclusion list
    pub fn is_excluded(&self, column: &str) -> bool {
        let lowered = column.to_lowercase();
        self.excluded_columns.iter().any(|c| c.to_lowercase() == lowered)
    }

    /// Look up the attrition cell of a record
    pub fn attrition_value<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        lookup(record, &self.attrition_columns)
    }

    /// Look up the department cell of a record
    pub fn department_value<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        lookup(record, &self.department_columns)
    }

    /// Whether an attrition text value means the employee left
    pub fn is_positive_attrition(&self, text: &str) -> bool {
        self.positive_attrition.iter().any(|t| t.eq_ignore_ascii_case(text))
    }
}

/// Find the first alias present in the record, exact key first, then
/// case-insensitively.
fn lookup<'r>(record: &'r Record, aliases: &[String]) -> Option<&'r Value> {
    for alias in aliases {
        if let Some(value) = record.get(alias) {
            return Some(value);
        }
        if let Some((_, value)) = record.iter().find(|(k, _)| k.eq_ignore_ascii_case(alias)) {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.numeric_threshold, 0.70);
        assert_eq!(config.max_departments, 5);
        assert_eq!(config.max_neighbors, 10);
        assert_eq!(config.unknown_department, "Unknown Department");
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let config = AnalysisConfig::default();
        assert!(config.is_excluded("EmployeeNumber"));
        assert!(config.is_excluded("ID"));
        assert!(!config.is_excluded("Age"));
    }

    #[test]
    fn test_alias_lookup() {
        let config = AnalysisConfig::default();
        let r = record(json!({"dept": "Sales", "ATTRITION": "Yes"}));
        assert_eq!(config.department_value(&r), Some(&json!("Sales")));
        assert_eq!(config.attrition_value(&r), Some(&json!("Yes")));

        let missing = record(json!({"Age": 30}));
        assert_eq!(config.department_value(&missing), None);
    }

    #[test]
    fn test_positive_attrition_tokens() {
        let config = AnalysisConfig::default();
        assert!(config.is_positive_attrition("YES"));
        assert!(config.is_positive_attrition("1"));
        assert!(config.is_positive_attrition("True"));
        assert!(!config.is_positive_attrition("No"));
        assert!(!config.is_positive_attrition("0"));
    }

    #[test]
    fn test_invalid_threshold_error() {
        let mut config = AnalysisConfig {
            numeric_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate_and_normalize(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_normalize_lowercases_tokens() {
        let mut config = AnalysisConfig {
            excluded_columns: vec!["StaffCode".to_string()],
            ..Default::default()
        };
        config.validate_and_normalize().unwrap();
        assert_eq!(config.excluded_columns, vec!["staffcode".to_string()]);
        assert!(config.is_excluded("STAFFCODE"));
    }

    #[test]
    fn test_serde_roundtrip_with_defaults() {
        let parsed: AnalysisConfig = serde_json::from_str(r#"{"max_neighbors": 3}"#).unwrap();
        assert_eq!(parsed.max_neighbors, 3);
        assert_eq!(parsed.max_departments, 5);
    }
}
