//! Similarity & statistics engine
//!
//! Ties the classifier, the statistics and the neighbor ranking together
//! for one target employee.

use crate::columns::classify_numeric_columns;
use crate::config::AnalysisConfig;
use crate::distance::normalize;
use crate::neighbors::rank_neighbors;
use crate::stats::{attrition_rate, department_breakdown, has_left};
use crate::summary::AnalysisSummary;
use attrix_core::{Dataset, Record, Result, Selection};
use tracing::{debug, info};

/// Computes attrition statistics and nearest neighbors for a target record
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    /// Create an engine with the given configuration
    pub fn new(mut config: AnalysisConfig) -> Result<Self> {
        config.validate_and_normalize()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate raw caller input, then analyze.
    ///
    /// An empty record list or an out-of-range index is rejected here,
    /// before any statistics are computed.
    pub fn analyze_records(&self, records: Vec<Record>, index: i64) -> Result<AnalysisSummary> {
        let dataset = Dataset::new(records)?;
        let selection = dataset.select(index)?;
        Ok(self.analyze(selection))
    }

    /// Analyze a validated selection. Never fails: degenerate data falls
    /// back to defined values.
    pub fn analyze(&self, selection: Selection<'_>) -> AnalysisSummary {
        let dataset = selection.dataset();
        let records = dataset.records();

        let numeric_columns = classify_numeric_columns(dataset, &self.config);
        let vectors = normalize(dataset, &numeric_columns);
        let similar_employees = rank_neighbors(
            dataset,
            &vectors,
            selection.index(),
            self.config.max_neighbors,
        );

        let summary = AnalysisSummary {
            total_employees: records.len(),
            attrition_rate: attrition_rate(records, &self.config),
            top_departments: department_breakdown(records, &self.config),
            numeric_columns,
            target_index: selection.index(),
            target_employee: selection.target().clone(),
            similar_employees,
        };

        debug!(
            features = summary.numeric_columns.len(),
            neighbors = summary.similar_employees.len(),
            "analysis complete"
        );
        info!(
            total = summary.total_employees,
            target = summary.target_index,
            attrition_rate = summary.attrition_rate,
            "analyzed employee"
        );
        summary
    }

    /// Whether a record counts as attrition under this engine's config
    pub fn has_left(&self, record: &Record) -> bool {
        has_left(record, &self.config)
    }
}
