//! Hugging Face Inference API adapter for zero-shot classification.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new(api_key)
//!     .with_model("facebook/bart-large-mnli")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let classifier = HuggingFaceClassifier::new(config)?;
//! ```
//!
//! The endpoint answers either with a single result object or with an
//! array of them (one per input); both shapes are accepted.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ClassificationError, InterestClassifier};

/// Default zero-shot model.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-mnli";

/// Default Inference API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Configuration for the Hugging Face classifier.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for authentication.
    api_key: Secret<String>,
    /// Model repository id.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(Secret::new(api_key.into()))
    }

    /// Creates a configuration from an already wrapped key.
    pub fn from_secret(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Zero-shot classifier backed by the Hugging Face Inference API.
pub struct HuggingFaceClassifier {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceClassifier {
    /// Creates a classifier with an HTTP client bound to the configured timeout.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn send_request(&self, request: &ZeroShotRequest<'_>) -> Result<Response, ClassificationError> {
        self.client
            .post(self.model_url())
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassificationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ClassificationError::Network(format!("Connection failed: {}", e))
                } else {
                    ClassificationError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, ClassificationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(ClassificationError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl InterestClassifier for HuggingFaceClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<Vec<String>, ClassificationError> {
        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters { candidate_labels },
        };

        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let body: ZeroShotResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::Malformed(e.to_string()))?;

        body.into_labels()
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
}

#[derive(Debug, Deserialize)]
struct ZeroShotResult {
    labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Single(ZeroShotResult),
    Batch(Vec<ZeroShotResult>),
}

impl ZeroShotResponse {
    /// Labels of the first result, best first.
    fn into_labels(self) -> Result<Vec<String>, ClassificationError> {
        let result = match self {
            ZeroShotResponse::Single(result) => result,
            ZeroShotResponse::Batch(results) => results
                .into_iter()
                .next()
                .ok_or_else(|| ClassificationError::Malformed("empty result array".to_string()))?,
        };
        Ok(result.labels)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}
