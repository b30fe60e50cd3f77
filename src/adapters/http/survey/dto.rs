//! HTTP DTOs for the survey endpoint.
//!
//! Field names are camelCase on the wire. Every request field is optional at
//! the serde level so that a missing `userId` or `questions` surfaces as a
//! validation error with a field name instead of a generic decode failure.

use serde::{Deserialize, Serialize};

use crate::application::AnalyzeSurveyResult;
use crate::domain::interests::SurveyResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/survey/analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSurveyRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub survey_response: Option<SurveyResponseBody>,
}

/// The submitted questionnaire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyResponseBody {
    #[serde(default)]
    pub questions: Option<Vec<QuestionAnswer>>,
}

/// One question and its free-text answer.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswer {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl From<QuestionAnswer> for SurveyResponse {
    fn from(qa: QuestionAnswer) -> Self {
        SurveyResponse::new(qa.question, qa.answer)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for a successful analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSurveyResponse {
    /// Up to three selected interests, phrase matches first.
    pub interests: Vec<String>,
    /// Up to three categories, classifier labels when available.
    pub top_categories: Vec<String>,
}

impl From<AnalyzeSurveyResult> for AnalyzeSurveyResponse {
    fn from(result: AnalyzeSurveyResult) -> Self {
        Self {
            interests: result.outcome.interests().to_vec(),
            top_categories: result.top_categories,
        }
    }
}
