//! Numeric column classification
//!
//! Decides which columns can serve as similarity features. The candidate set
//! is the first record's key set: a column that record 0 lacks is never a
//! feature, however numeric it is elsewhere.

use crate::config::AnalysisConfig;
use attrix_core::value::is_numeric_like;
use attrix_core::Dataset;
use tracing::debug;

/// Return the feature columns of a dataset, in first-record key order
pub fn classify_numeric_columns(dataset: &Dataset, config: &AnalysisConfig) -> Vec<String> {
    let records = dataset.records();
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let total = records.len() as f64;

    let columns: Vec<String> = first
        .keys()
        .filter(|column| !config.is_excluded(column))
        .filter(|column| {
            let numeric = records
                .iter()
                .filter(|r| r.get(column.as_str()).is_some_and(is_numeric_like))
                .count();
            numeric as f64 / total >= config.numeric_threshold
        })
        .cloned()
        .collect();

    debug!(
        candidates = first.len(),
        selected = columns.len(),
        "classified numeric columns"
    );
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrix_core::Record;
    use serde_json::{json, Value};

    fn dataset(rows: Vec<Value>) -> Dataset {
        let records: Vec<Record> = rows
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect();
        Dataset::new(records).unwrap()
    }

    #[test]
    fn test_numeric_and_text_columns() {
        let d = dataset(vec![
            json!({"Age": 30, "Department": "Sales", "Income": "5000"}),
            json!({"Age": 40, "Department": "R&D", "Income": "6200.5"}),
        ]);
        let columns = classify_numeric_columns(&d, &AnalysisConfig::default());
        assert_eq!(columns, vec!["Age".to_string(), "Income".to_string()]);
    }

    #[test]
    fn test_identifier_columns_excluded() {
        let d = dataset(vec![
            json!({"EmployeeNumber": 1, "ID": 10, "employee_id": 5, "Age": 30}),
            json!({"EmployeeNumber": 2, "ID": 11, "employee_id": 6, "Age": 31}),
        ]);
        let columns = classify_numeric_columns(&d, &AnalysisConfig::default());
        assert_eq!(columns, vec!["Age".to_string()]);
    }

    #[test]
    fn test_below_threshold_excluded() {
        // 2 of 3 parse, 66.7% < 70%
        let d = dataset(vec![
            json!({"Score": "35"}),
            json!({"Score": "41"}),
            json!({"Score": "abc"}),
        ]);
        assert!(classify_numeric_columns(&d, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 7 of 10 parse, exactly 70%
        let mut rows: Vec<Value> = (0..7).map(|i| json!({"Score": i})).collect();
        rows.extend((0..3).map(|_| json!({"Score": null})));
        let d = dataset(rows);
        assert_eq!(
            classify_numeric_columns(&d, &AnalysisConfig::default()),
            vec!["Score".to_string()]
        );
    }

    #[test]
    fn test_first_record_defines_candidates() {
        let d = dataset(vec![
            json!({"Age": 30}),
            json!({"Age": 40, "Tenure": 3}),
            json!({"Age": 50, "Tenure": 4}),
        ]);
        let columns = classify_numeric_columns(&d, &AnalysisConfig::default());
        assert_eq!(columns, vec!["Age".to_string()]);
    }

    #[test]
    fn test_booleans_and_nulls_do_not_count() {
        let d = dataset(vec![
            json!({"Remote": true, "Bonus": null}),
            json!({"Remote": false, "Bonus": null}),
        ]);
        assert!(classify_numeric_columns(&d, &AnalysisConfig::default()).is_empty());
    }
}
