//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{UserInterestState, UserRecord};
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    custom_interests: Vec<String>,
    categorized_interests: Vec<String>,
    last_survey_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?;

        Ok(UserRecord {
            id,
            label: row.email,
            interests: UserInterestState {
                custom_interests: row.custom_interests,
                categorized_interests: row.categorized_interests,
                last_survey_at: row.last_survey_at.map(Timestamp::from_datetime),
            },
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, custom_interests, categorized_interests, last_survey_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find user", e))?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn update_interests(
        &self,
        id: &UserId,
        interests: &UserInterestState,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                custom_interests = $2,
                categorized_interests = $3,
                last_survey_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(&interests.custom_interests)
        .bind(&interests.categorized_interests)
        .bind(interests.last_survey_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update user interests", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", id),
            ));
        }

        Ok(())
    }
}
