//! InterestClassifier port - external zero-shot text classification.
//!
//! Classification is enrichment only: every failure mode is reported as a
//! [`ClassificationError`] and the caller continues without it.

use async_trait::async_trait;
use thiserror::Error;

/// Port for a zero-shot classification service.
#[async_trait]
pub trait InterestClassifier: Send + Sync {
    /// Rank `candidate_labels` for `text`, best first.
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<Vec<String>, ClassificationError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Why a classification could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Classifier is switched off or has no credentials.
    #[error("classifier not configured")]
    NotConfigured,

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a non-success status.
    #[error("service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClassificationError {
    /// True for failures expected in normal operation (not worth a warning).
    pub fn is_expected(&self) -> bool {
        matches!(self, ClassificationError::NotConfigured)
    }
}
