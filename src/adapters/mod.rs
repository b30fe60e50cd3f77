//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Zero-shot classification (Hugging Face, mock, disabled)
//! - `http` - Axum REST API
//! - `memory` - In-memory storage for tests and database-less runs
//! - `postgres` - PostgreSQL storage

pub mod classifier;
pub mod http;
pub mod memory;
pub mod postgres;

pub use classifier::{DisabledClassifier, HuggingFaceClassifier, HuggingFaceConfig, MockClassifier};
pub use memory::{
    InMemoryAuditLog, InMemoryChannelRepository, InMemoryLexiconRepository,
    InMemorySurveyAnalysisRepository, InMemoryUserRepository,
};
