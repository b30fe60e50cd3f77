//! In-memory adapters for every storage port.
//!
//! Used by tests and for running without a database. Not suitable for
//! multi-server deployments.

mod audit_log;
mod channel_repository;
mod lexicon_repository;
mod survey_analysis_repository;
mod user_repository;

pub use audit_log::InMemoryAuditLog;
pub use channel_repository::InMemoryChannelRepository;
pub use lexicon_repository::InMemoryLexiconRepository;
pub use survey_analysis_repository::InMemorySurveyAnalysisRepository;
pub use user_repository::InMemoryUserRepository;
