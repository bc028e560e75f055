//! Analysis output structures
//!
//! The serializable result of one analysis run, handed to the REST layer
//! and to the prompt builder.

use attrix_core::Record;
use serde::{Deserialize, Serialize};

/// Employee count and attrition rate of one department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentSummary {
    pub department: String,
    pub count: usize,
    /// Percentage in [0, 100], two decimals
    pub attrition_rate: f64,
}

/// A record ranked by distance to the target employee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeighborResult {
    /// Position of the record in the dataset
    pub index: usize,
    /// Euclidean distance between normalized feature vectors
    pub distance: f64,
    pub record: Record,
}

/// Full result of analyzing one employee against the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSummary {
    pub total_employees: usize,
    /// Overall attrition percentage in [0, 100], two decimals
    pub attrition_rate: f64,
    pub top_departments: Vec<DepartmentSummary>,
    pub numeric_columns: Vec<String>,
    pub target_index: usize,
    pub target_employee: Record,
    pub similar_employees: Vec<NeighborResult>,
}

impl AnalysisSummary {
    /// Number of neighbors that left the company, using `has_left`
    pub fn neighbors_left<F>(&self, has_left: F) -> usize
    where
        F: Fn(&Record) -> bool,
    {
        self.similar_employees
            .iter()
            .filter(|n| has_left(&n.record))
            .count()
    }

    /// Distance of the closest neighbor, if any
    pub fn closest_distance(&self) -> Option<f64> {
        self.similar_employees.first().map(|n| n.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn neighbor(index: usize, distance: f64, attrition: &str) -> NeighborResult {
        NeighborResult {
            index,
            distance,
            record: json!({"Attrition": attrition}).as_object().cloned().unwrap(),
        }
    }

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            total_employees: 3,
            attrition_rate: 33.33,
            top_departments: vec![DepartmentSummary {
                department: "Sales".to_string(),
                count: 2,
                attrition_rate: 50.0,
            }],
            numeric_columns: vec!["Age".to_string()],
            target_index: 0,
            target_employee: json!({"Attrition": "Yes"}).as_object().cloned().unwrap(),
            similar_employees: vec![neighbor(2, 0.5, "No"), neighbor(1, 1.5, "Yes")],
        }
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["total_employees"], 3);
        assert_eq!(json["attrition_rate"], 33.33);
        assert_eq!(json["top_departments"][0]["department"], "Sales");
        assert_eq!(json["similar_employees"][0]["index"], 2);
        assert_eq!(json["similar_employees"][0]["record"]["Attrition"], "No");
    }

    #[test]
    fn test_neighbor_helpers() {
        let s = summary();
        assert_eq!(s.closest_distance(), Some(0.5));
        let left = s.neighbors_left(|r| r.get("Attrition").and_then(|v| v.as_str()) == Some("Yes"));
        assert_eq!(left, 1);
    }
}
