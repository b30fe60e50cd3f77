//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter (`dto`, `handlers`, `routes`);
//! [`api_router`] composes them under `/api` next to `GET /health`.

pub mod error;
pub mod lexicon;
pub mod survey;

use axum::routing::get;
use axum::Router;

pub use error::{ApiError, ErrorResponse};
pub use lexicon::{lexicon_router, LexiconAppState};
pub use survey::{survey_router, SurveyAppState};

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Build the complete API router.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/survey/analyze`
/// - `/api/admin/lexicon/{stopwords,keywords}`
pub fn api_router(survey: SurveyAppState, lexicon: LexiconAppState) -> Router {
    let api = Router::new()
        .merge(survey_router().with_state(survey))
        .merge(lexicon_router().with_state(lexicon));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}
