//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - User interest fields
//! - `PostgresLexiconRepository` - Stopwords and multi-word keywords
//! - `PostgresSurveyAnalysisRepository` - Edit-window guarded analyses
//! - `PostgresChannelRepository` - Channels, unique by title
//! - `PostgresAuditLog` - Append-only audit trail
//!
//! Schema lives in `migrations/`; run it with [`run_migrations`].

mod audit_log;
mod channel_repository;
mod lexicon_repository;
mod survey_analysis_repository;
mod user_repository;

pub use audit_log::PostgresAuditLog;
pub use channel_repository::PostgresChannelRepository;
pub use lexicon_repository::PostgresLexiconRepository;
pub use survey_analysis_repository::PostgresSurveyAnalysisRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::PgPool;

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
