//! Interest classifier adapters.
//!
//! ## Available Adapters
//!
//! - `HuggingFaceClassifier` - Hugging Face Inference API zero-shot models
//! - `MockClassifier` - Configurable mock for testing
//! - `DisabledClassifier` - Always unavailable; used when classification is off

mod huggingface;
mod mock;

use async_trait::async_trait;

pub use huggingface::{HuggingFaceClassifier, HuggingFaceConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock::{MockClassifier, MockResponse};

use crate::ports::{ClassificationError, InterestClassifier};

/// Classifier that always reports `NotConfigured`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl InterestClassifier for DisabledClassifier {
    async fn classify(
        &self,
        _text: &str,
        _candidate_labels: &[String],
    ) -> Result<Vec<String>, ClassificationError> {
        Err(ClassificationError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
