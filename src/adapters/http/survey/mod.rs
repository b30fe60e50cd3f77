//! HTTP adapter for survey analysis.
//!
//! - `POST /api/survey/analyze` - Extract interests and categories from answers

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalyzeSurveyRequest, AnalyzeSurveyResponse};
pub use handlers::SurveyAppState;
pub use routes::{survey_router, survey_routes};
