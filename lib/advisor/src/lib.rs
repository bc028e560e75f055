//! # Attrix Advisor
//!
//! Natural-language retention recommendations for an analyzed employee.
//!
//! - [`build_prompt`] renders an analysis summary into a prompt
//! - [`TextGenerator`] abstracts the text-generation service
//! - [`GeminiClient`] is the HTTP implementation for the Generative Language API
//! - [`Advisor`] walks an ordered model list, falling back only on
//!   "model not found"

pub mod advisor;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use advisor::{Advisor, Recommendation};
pub use client::{GeminiClient, TextGenerator};
pub use config::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODELS};
pub use error::{AdvisorError, GenerationError, Result};
pub use prompt::build_prompt;
