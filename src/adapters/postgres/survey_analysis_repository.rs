//! PostgreSQL implementation of SurveyAnalysisRepository.
//!
//! The edit-window guard is a conditional upsert: the `DO UPDATE ... WHERE`
//! clause only fires when the stored record is old enough, and `RETURNING`
//! tells us whether anything was written.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::interests::{SurveyAnalysis, SurveyResponse};
use crate::ports::{SurveyAnalysisRepository, WindowSave};

pub struct PostgresSurveyAnalysisRepository {
    pool: PgPool,
}

impl PostgresSurveyAnalysisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a survey analysis.
#[derive(Debug, sqlx::FromRow)]
struct SurveyAnalysisRow {
    id: Uuid,
    user_id: String,
    responses: Json<Vec<SurveyResponse>>,
    raw_answers: Vec<String>,
    selected_interests: Vec<String>,
    matched_categories: Vec<String>,
    top_categories: Vec<String>,
    last_edited_at: DateTime<Utc>,
}

impl TryFrom<SurveyAnalysisRow> for SurveyAnalysis {
    type Error = DomainError;

    fn try_from(row: SurveyAnalysisRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
        })?;

        Ok(SurveyAnalysis {
            id: AnalysisId::from_uuid(row.id),
            user_id,
            responses: row.responses.0,
            raw_answers: row.raw_answers,
            selected_interests: row.selected_interests,
            matched_categories: row.matched_categories,
            top_categories: row.top_categories,
            last_edited_at: Timestamp::from_datetime(row.last_edited_at),
        })
    }
}

#[async_trait]
impl SurveyAnalysisRepository for PostgresSurveyAnalysisRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<SurveyAnalysis>, DomainError> {
        let row: Option<SurveyAnalysisRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, responses, raw_answers, selected_interests,
                   matched_categories, top_categories, last_edited_at
            FROM survey_analyses
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find survey analysis", e))?;

        row.map(SurveyAnalysis::try_from).transpose()
    }

    async fn save_if_window_elapsed(
        &self,
        analysis: &SurveyAnalysis,
        cutoff: Timestamp,
    ) -> Result<WindowSave, DomainError> {
        let written: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO survey_analyses (
                id, user_id, responses, raw_answers, selected_interests,
                matched_categories, top_categories, last_edited_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                responses = EXCLUDED.responses,
                raw_answers = EXCLUDED.raw_answers,
                selected_interests = EXCLUDED.selected_interests,
                matched_categories = EXCLUDED.matched_categories,
                top_categories = EXCLUDED.top_categories,
                last_edited_at = EXCLUDED.last_edited_at
            WHERE survey_analyses.last_edited_at <= $9
            RETURNING id
            "#,
        )
        .bind(analysis.id.as_uuid())
        .bind(analysis.user_id.as_str())
        .bind(Json(&analysis.responses))
        .bind(&analysis.raw_answers)
        .bind(&analysis.selected_interests)
        .bind(&analysis.matched_categories)
        .bind(&analysis.top_categories)
        .bind(analysis.last_edited_at.as_datetime())
        .bind(cutoff.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save survey analysis", e))?;

        if written.is_some() {
            return Ok(WindowSave::Saved);
        }

        let last_edited_at: DateTime<Utc> = sqlx::query_scalar(
            "SELECT last_edited_at FROM survey_analyses WHERE user_id = $1",
        )
        .bind(analysis.user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to read conflicting survey analysis", e))?;

        Ok(WindowSave::WindowClosed {
            last_edited_at: Timestamp::from_datetime(last_edited_at),
        })
    }
}
