//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `UserRepository` - External user record (read + interest update)
//! - `LexiconRepository` - Stopwords and multi-word keywords
//! - `SurveyAnalysisRepository` - One analysis per user, edit-window guarded
//! - `ChannelRepository` - Topical channels, unique by title
//! - `AuditLog` - Append-only audit trail
//!
//! ## External Service Ports
//!
//! - `InterestClassifier` - Zero-shot text classification

mod audit_log;
mod channel_repository;
mod interest_classifier;
mod lexicon_repository;
mod survey_analysis_repository;
mod user_repository;

pub use audit_log::AuditLog;
pub use channel_repository::{ChannelRepository, SaveResult};
pub use interest_classifier::{ClassificationError, InterestClassifier};
pub use lexicon_repository::{AddResult, LexiconRepository};
pub use survey_analysis_repository::{SurveyAnalysisRepository, WindowSave};
pub use user_repository::UserRepository;
