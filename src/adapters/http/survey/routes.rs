//! Axum router configuration for survey endpoints.

use axum::{routing::post, Router};

use super::handlers::{analyze_survey, SurveyAppState};

/// Create the survey API router.
///
/// # Routes
/// - `POST /analyze` - Analyze survey answers
pub fn survey_routes() -> Router<SurveyAppState> {
    Router::new().route("/analyze", post(analyze_survey))
}

/// Create the survey module router, mounted under `/api`.
pub fn survey_router() -> Router<SurveyAppState> {
    Router::new().nest("/survey", survey_routes())
}
