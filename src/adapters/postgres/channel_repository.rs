//! PostgreSQL implementation of ChannelRepository.
//!
//! Uniqueness on `title` is enforced by the `channels_title_key` constraint;
//! inserts use `ON CONFLICT DO NOTHING` so concurrent analyses never fail on
//! a shared interest.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::channel::Channel;
use crate::domain::foundation::{ChannelId, DomainError, Timestamp};
use crate::ports::{ChannelRepository, SaveResult};

pub struct PostgresChannelRepository {
    pool: PgPool,
}

impl PostgresChannelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
}

impl From<ChannelRow> for Channel {
    fn from(row: ChannelRow) -> Self {
        Channel::reconstitute(
            ChannelId::from_uuid(row.id),
            row.title,
            Timestamp::from_datetime(row.created_at),
        )
    }
}

#[async_trait]
impl ChannelRepository for PostgresChannelRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Channel>, DomainError> {
        let row: Option<ChannelRow> =
            sqlx::query_as("SELECT id, title, created_at FROM channels WHERE title = $1")
                .bind(title)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find channel", e))?;

        Ok(row.map(Channel::from))
    }

    async fn insert_if_absent(&self, channel: &Channel) -> Result<SaveResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO channels (id, title, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (title) DO NOTHING
            "#,
        )
        .bind(channel.id.as_uuid())
        .bind(&channel.title)
        .bind(channel.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert channel", e))?;

        if result.rows_affected() == 0 {
            Ok(SaveResult::AlreadyExists)
        } else {
            Ok(SaveResult::Inserted)
        }
    }
}
