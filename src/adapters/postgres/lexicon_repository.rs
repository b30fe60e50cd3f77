//! PostgreSQL implementation of LexiconRepository.
//!
//! Both sets live in one `lexicon_entries` table, unique on `(kind, text)`.
//! The serial primary key preserves insertion order for keywords.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::interests::{LexicalEntry, LexicalKind};
use crate::ports::{AddResult, LexiconRepository};

pub struct PostgresLexiconRepository {
    pool: PgPool,
}

impl PostgresLexiconRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list(&self, kind: LexicalKind) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT text FROM lexicon_entries
            WHERE kind = $1
            ORDER BY id ASC
            "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list lexicon entries", e))
    }
}

#[async_trait]
impl LexiconRepository for PostgresLexiconRepository {
    async fn list_stopwords(&self) -> Result<Vec<String>, DomainError> {
        self.list(LexicalKind::Stopword).await
    }

    async fn list_keywords(&self) -> Result<Vec<String>, DomainError> {
        self.list(LexicalKind::MultiWordKeyword).await
    }

    async fn add(&self, entry: &LexicalEntry) -> Result<AddResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO lexicon_entries (kind, text)
            VALUES ($1, $2)
            ON CONFLICT (kind, text) DO NOTHING
            "#,
        )
        .bind(entry.kind().as_str())
        .bind(entry.text())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to add lexicon entry", e))?;

        if result.rows_affected() == 0 {
            Ok(AddResult::Duplicate)
        } else {
            Ok(AddResult::Added)
        }
    }

    async fn remove(&self, kind: LexicalKind, text: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM lexicon_entries WHERE kind = $1 AND text = $2")
            .bind(kind.as_str())
            .bind(text)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to remove lexicon entry", e))?;

        Ok(result.rows_affected() > 0)
    }
}
