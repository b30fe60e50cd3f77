//! External zero-shot classifier configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::interests::CATEGORIES;

/// Classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Whether to call the external classifier at all
    #[serde(default)]
    pub enabled: bool,

    /// Inference API token
    pub api_key: Option<Secret<String>>,

    /// Zero-shot model id
    #[serde(default = "default_model")]
    pub model: String,

    /// Inference API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of taxonomy names offered as candidate labels
    #[serde(default = "default_candidate_label_limit")]
    pub candidate_label_limit: usize,
}

impl ClassifierConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.api_key.is_none() {
            return Err(ValidationError::MissingRequired("CLASSIFIER_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidClassifierUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidClassifierTimeout);
        }
        if self.candidate_label_limit == 0 || self.candidate_label_limit > CATEGORIES.len() {
            return Err(ValidationError::InvalidCandidateLimit {
                max: CATEGORIES.len(),
            });
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            candidate_label_limit: default_candidate_label_limit(),
        }
    }
}

fn default_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_candidate_label_limit() -> usize {
    10
}
