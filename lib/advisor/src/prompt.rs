//! Prompt building
//!
//! Renders an [`AnalysisSummary`] into the plain-text request sent to the
//! generation service.

use attrix_core::value::as_text;
use attrix_core::Record;
use attrix_similarity::stats::has_left;
use attrix_similarity::{AnalysisConfig, AnalysisSummary};

/// Neighbors listed in the prompt
pub const PROMPT_NEIGHBORS: usize = 5;

/// Build the retention-advice prompt for one analyzed employee
pub fn build_prompt(summary: &AnalysisSummary, config: &AnalysisConfig) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an HR analytics expert. Based on the employee data below, \
         assess this employee's attrition risk and recommend concrete retention actions.\n\n",
    );

    prompt.push_str("## Dataset overview\n");
    prompt.push_str(&format!("- Total employees: {}\n", summary.total_employees));
    prompt.push_str(&format!("- Overall attrition rate: {:.2}%\n", summary.attrition_rate));
    if !summary.top_departments.is_empty() {
        prompt.push_str("- Departments by attrition rate:\n");
        for dept in &summary.top_departments {
            prompt.push_str(&format!(
                "  - {}: {:.2}% ({} employees)\n",
                dept.department, dept.attrition_rate, dept.count
            ));
        }
    }

    prompt.push_str(&format!("\n## Target employee (row {})\n", summary.target_index));
    write_record(&mut prompt, &summary.target_employee);

    let shown = summary.similar_employees.len().min(PROMPT_NEIGHBORS);
    if shown > 0 {
        let left = summary.neighbors_left(|r| has_left(r, config));
        let features = if summary.numeric_columns.is_empty() {
            "none".to_string()
        } else {
            summary.numeric_columns.join(", ")
        };
        prompt.push_str(&format!("\n## {} most similar employees\n", shown));
        prompt.push_str(&format!("Similarity features: {}\n", features));
        prompt.push_str(&format!(
            "Of the {} nearest employees, {} left the company (closest distance {:.3}).\n",
            summary.similar_employees.len(),
            left,
            summary.closest_distance().unwrap_or(0.0)
        ));
        for neighbor in summary.similar_employees.iter().take(shown) {
            let status = if has_left(&neighbor.record, config) { "left" } else { "stayed" };
            prompt.push_str(&format!(
                "- Row {} (distance {:.3}, {}):\n",
                neighbor.index, neighbor.distance, status
            ));
            write_record(&mut prompt, &neighbor.record);
        }
    }

    prompt.push_str(
        "\n## Please provide\n\
         1. An attrition risk level (low, medium or high) with a short justification\n\
         2. The main factors driving that risk\n\
         3. Three to five specific retention actions\n\
         4. What the similar employees suggest about this employee's outlook\n",
    );

    prompt
}

fn write_record(prompt: &mut String, record: &Record) {
    for (column, value) in record {
        let text = as_text(value).unwrap_or_else(|| "n/a".to_string());
        prompt.push_str(&format!("  - {}: {}\n", column, text));
    }
}
