use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Google Generative Language API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Models tried in order when the service reports "model not found"
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the text-generation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorConfig {
    #[serde(skip_serializing)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Ordered fallback list of model names
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AdvisorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            models: default_models(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the fallback list; an empty list keeps the defaults
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        if !models.is_empty() {
            self.models = models;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AdvisorError::InvalidConfig("API key is empty".into()));
        }
        if self.models.is_empty() {
            return Err(AdvisorError::InvalidConfig("at least one model is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.models.len(), 3);
        assert_eq!(config.models[0], "gemini-1.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_models_keep_defaults() {
        let config = AdvisorConfig::new("key").with_models(vec![]);
        assert_eq!(config.models.len(), 3);

        let config = AdvisorConfig::new("key").with_models(vec!["custom".to_string()]);
        assert_eq!(config.models, vec!["custom".to_string()]);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            AdvisorConfig::new("  ").validate(),
            Err(AdvisorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let json = serde_json::to_string(&AdvisorConfig::new("secret")).unwrap();
        assert!(!json.contains("secret"));
    }
}
