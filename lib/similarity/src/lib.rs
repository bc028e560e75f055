//! # Attrix Similarity
//!
//! Attrition statistics and nearest-neighbor search over employee records.
//!
//! ## Features
//!
//! - **Column classification**: numeric feature columns inferred from the data
//! - **Attrition statistics**: overall rate and per-department breakdown
//! - **Z-score normalization**: population mean/std-dev per feature column
//! - **Nearest neighbors**: Euclidean ranking with stable tie-breaking
//!
//! ## Example
//!
//! ```rust
//! use attrix_similarity::AnalysisEngine;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"Department": "Sales", "Attrition": "Yes", "Age": 30}),
//!     json!({"Department": "Sales", "Attrition": "No", "Age": 40}),
//!     json!({"Department": "R&D", "Attrition": "No", "Age": 35}),
//! ]
//! .into_iter()
//! .filter_map(|v| v.as_object().cloned())
//! .collect();
//!
//! let engine = AnalysisEngine::default();
//! let summary = engine.analyze_records(records, 0).unwrap();
//!
//! assert_eq!(summary.attrition_rate, 33.33);
//! assert_eq!(summary.top_departments[0].department, "Sales");
//! assert_eq!(summary.similar_employees[0].index, 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Dataset   │────>│ Classifier  │────>│  Normalize  │
//! │ + selection │     │ (columns)   │     │  (z-score)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       ├─────────────>│    Stats    │           │
//!       │              └─────────────┘           │
//!       │              ┌─────────────┐           │
//!       └─────────────>│  Neighbors  │<──────────┘
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │   Summary   │
//!                      └─────────────┘
//! ```

pub mod columns;
pub mod config;
pub mod distance;
pub mod engine;
pub mod neighbors;
pub mod stats;
pub mod summary;

// Re-export main types for convenience
pub use columns::classify_numeric_columns;
pub use config::{
    AnalysisConfig,
    DEFAULT_MAX_DEPARTMENTS,
    DEFAULT_MAX_NEIGHBORS,
    DEFAULT_NUMERIC_THRESHOLD,
    UNKNOWN_DEPARTMENT,
};
pub use distance::{normalize, ColumnStats};
pub use engine::AnalysisEngine;
pub use neighbors::rank_neighbors;
pub use summary::{AnalysisSummary, DepartmentSummary, NeighborResult};
