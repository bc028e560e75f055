//! Retention advisor
//!
//! Sends the analysis prompt to the generation service, walking the model
//! fallback list only while the service answers "model not found".

use crate::client::{GeminiClient, TextGenerator};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, GenerationError, Result};
use crate::prompt::build_prompt;
use attrix_similarity::{AnalysisConfig, AnalysisSummary};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Generated recommendation and the model that produced it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub text: String,
    pub model: String,
}

pub struct Advisor {
    generator: Arc<dyn TextGenerator>,
    models: Vec<String>,
}

impl Advisor {
    /// Create an advisor over any generator with an ordered model list
    pub fn new(generator: Arc<dyn TextGenerator>, models: Vec<String>) -> Result<Self> {
        if models.is_empty() {
            return Err(AdvisorError::InvalidConfig("at least one model is required".into()));
        }
        Ok(Self { generator, models })
    }

    /// Create an advisor backed by the Generative Language API
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        config.validate()?;
        let client = GeminiClient::new(config)
            .map_err(|e| AdvisorError::InvalidConfig(e.to_string()))?;
        Self::new(Arc::new(client), config.models.clone())
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Build the prompt for a summary and request a recommendation
    pub async fn recommend(
        &self,
        summary: &AnalysisSummary,
        config: &AnalysisConfig,
    ) -> Result<Recommendation> {
        let prompt = build_prompt(summary, config);
        self.generate(&prompt).await
    }

    /// Try each model in order until one answers.
    ///
    /// Only `ModelNotFound` moves on to the next model; any other failure
    /// is returned immediately together with the models tried so far.
    pub async fn generate(&self, prompt: &str) -> Result<Recommendation> {
        let mut attempted = Vec::with_capacity(self.models.len());

        for model in &self.models {
            attempted.push(model.clone());
            match self.generator.generate(model, prompt).await {
                Ok(text) => {
                    info!(model = %model, attempts = attempted.len(), "recommendation generated");
                    return Ok(Recommendation {
                        text,
                        model: model.clone(),
                    });
                }
                Err(GenerationError::ModelNotFound(_)) => {
                    warn!(model = %model, "model not found, trying next fallback");
                }
                Err(GenerationError::Failed(message)) => {
                    warn!(model = %model, error = %message, "generation failed");
                    return Err(AdvisorError::Generation {
                        model: model.clone(),
                        message,
                        attempted,
                    });
                }
            }
        }

        Err(AdvisorError::AllModelsUnavailable { attempted })
    }
}
