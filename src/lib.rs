//! # Attrix
//!
//! Employee attrition analysis: dataset statistics, nearest-neighbor
//! employees and AI-generated retention recommendations.
//!
//! Given a dataset of employee records and one selected employee, Attrix
//! computes the overall attrition rate, the departments with the highest
//! attrition, the numeric feature columns of the dataset, and the ten
//! employees most similar to the selected one (z-score normalized
//! Euclidean distance). The result can be turned into a prompt for a
//! text-generation service that writes retention advice.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install attrix
//! GEMINI_API_KEY=... attrix serve --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use attrix::prelude::*;
//!
//! let dataset = parse_csv(
//!     "Department,Attrition,Age\nSales,Yes,30\nSales,No,40\nR&D,No,35\n",
//! ).unwrap();
//! let selection = dataset.select(0).unwrap();
//!
//! let engine = AnalysisEngine::default();
//! let summary = engine.analyze(selection);
//!
//! assert_eq!(summary.total_employees, 3);
//! assert_eq!(summary.attrition_rate, 33.33);
//! assert_eq!(summary.similar_employees.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! - [`attrix-core`](https://docs.rs/attrix-core) - Records, datasets, numeric coercion, CSV loading
//! - [`attrix-similarity`](https://docs.rs/attrix-similarity) - Column classifier, statistics, nearest neighbors
//! - [`attrix-advisor`](https://docs.rs/attrix-advisor) - Prompt building and text-generation client
//! - [`attrix-api`](https://docs.rs/attrix-api) - REST API

// Re-export core types
pub use attrix_core::{
    load_csv, parse_csv,
    Dataset, Record, Selection, FeatureVector,
    Error, Result,
};

// Re-export the engine
pub use attrix_similarity::{
    AnalysisConfig, AnalysisEngine, AnalysisSummary,
    DepartmentSummary, NeighborResult,
};

// Re-export the advisor
pub use attrix_advisor::{
    Advisor, AdvisorConfig, AdvisorError, Recommendation,
    build_prompt,
};

// Re-export API
pub use attrix_api::{ApiState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_csv, parse_csv,
        Dataset, Record, Selection,
        AnalysisConfig, AnalysisEngine, AnalysisSummary,
        Advisor, AdvisorConfig, Recommendation,
        Error, Result,
    };
}
