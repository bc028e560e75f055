use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Failure of a single generation call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The service does not know the requested model; the next fallback
    /// model may be tried.
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("{0}")]
    Failed(String),
}

/// Failure of a recommendation request across all attempted models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("No generation model available (attempted: {})", .attempted.join(", "))]
    AllModelsUnavailable { attempted: Vec<String> },

    #[error("Generation failed on model {model}: {message} (attempted: {})", .attempted.join(", "))]
    Generation {
        model: String,
        message: String,
        attempted: Vec<String>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AdvisorError {
    /// Models tried before the request gave up
    pub fn attempted_models(&self) -> &[String] {
        match self {
            AdvisorError::AllModelsUnavailable { attempted } => attempted,
            AdvisorError::Generation { attempted, .. } => attempted,
            AdvisorError::InvalidConfig(_) => &[],
        }
    }
}
