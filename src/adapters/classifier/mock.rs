//! Mock classifier for testing.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockClassifier::new()
//!     .with_labels(vec!["Music", "Arts"])
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ClassificationError, InterestClassifier};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Labels(Vec<String>),
    Error(ClassificationError),
}

/// Configurable classifier that returns queued responses.
///
/// With an empty queue it echoes the candidate labels back in order.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_labels<S: Into<String>>(self, labels: Vec<S>) -> Self {
        lock(&self.responses).push_back(MockResponse::Labels(
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: ClassificationError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of classify calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Text and labels of every call, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl InterestClassifier for MockClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<Vec<String>, ClassificationError> {
        lock(&self.calls).push((text.to_string(), candidate_labels.to_vec()));

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = lock(&self.responses).pop_front();
        match next {
            Some(MockResponse::Labels(labels)) => Ok(labels),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok(candidate_labels.to_vec()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
