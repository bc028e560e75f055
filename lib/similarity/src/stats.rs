//! Attrition statistics
//!
//! Overall attrition rate and the per-department breakdown.

use crate::config::AnalysisConfig;
use crate::summary::DepartmentSummary;
use ahash::AHashMap;
use attrix_core::value::as_text;
use attrix_core::Record;

/// Round a percentage to two decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of `part` in `total` as a percentage rounded to two decimals
#[inline]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Whether a record's attrition field marks the employee as having left
pub fn has_left(record: &Record, config: &AnalysisConfig) -> bool {
    config
        .attrition_value(record)
        .and_then(as_text)
        .is_some_and(|text| config.is_positive_attrition(&text))
}

/// Department label of a record, falling back to the unknown label
pub fn department_label(record: &Record, config: &AnalysisConfig) -> String {
    config
        .department_value(record)
        .and_then(as_text)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| config.unknown_department.clone())
}

/// Overall attrition rate of the records, in percent
pub fn attrition_rate(records: &[Record], config: &AnalysisConfig) -> f64 {
    let left = records.iter().filter(|r| has_left(r, config)).count();
    percentage(left, records.len())
}

/// Department breakdown sorted by descending attrition rate.
///
/// Departments appear in first-seen order before sorting and the sort is
/// stable, so equal rates keep that order. The list is truncated to
/// `config.max_departments`.
pub fn department_breakdown(records: &[Record], config: &AnalysisConfig) -> Vec<DepartmentSummary> {
    let mut positions: AHashMap<String, usize> = AHashMap::new();
    let mut tallies: Vec<(String, usize, usize)> = Vec::new();

    for record in records {
        let label = department_label(record, config);
        let left = usize::from(has_left(record, config));
        match positions.get(&label) {
            Some(&pos) => {
                tallies[pos].1 += 1;
                tallies[pos].2 += left;
            }
            None => {
                positions.insert(label.clone(), tallies.len());
                tallies.push((label, 1, left));
            }
        }
    }

    let mut summaries: Vec<DepartmentSummary> = tallies
        .into_iter()
        .map(|(department, count, left)| DepartmentSummary {
            department,
            count,
            attrition_rate: percentage(left, count),
        })
        .collect();

    // Vec::sort_by is stable
    summaries.sort_by(|a, b| b.attrition_rate.total_cmp(&a.attrition_rate));
    summaries.truncate(config.max_departments);
    summaries
}
