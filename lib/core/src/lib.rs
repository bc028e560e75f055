//! # Attrix Core
//!
//! Core types for the Attrix attrition analysis engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Record`] - One employee row, column name to scalar value
//! - [`Dataset`] - A non-empty, ordered list of records
//! - [`Selection`] - A dataset bound to a validated target index
//! - [`FeatureVector`] - A normalized numeric feature vector
//!
//! ## Example
//!
//! ```rust
//! use attrix_core::{parse_csv, value::parse_number};
//!
//! let dataset = parse_csv("Age,Attrition\n30,Yes\n40,No\n").unwrap();
//! let selection = dataset.select(0).unwrap();
//!
//! assert_eq!(selection.target()["Attrition"], "Yes");
//! assert_eq!(parse_number(&selection.target()["Age"]), Some(30.0));
//! assert!(dataset.select(2).is_err());
//! ```

pub mod error;
pub mod loader;
pub mod record;
pub mod value;
pub mod vector;

pub use error::{Error, Result};
pub use loader::{load_csv, parse_csv, read_csv};
pub use record::{Dataset, Record, Selection};
pub use vector::FeatureVector;
