//! Axum router configuration for lexicon administration.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{
    add_keyword, add_stopword, list_keywords, list_stopwords, remove_keyword, remove_stopword,
    LexiconAppState,
};

/// Create the lexicon admin router.
///
/// # Routes
/// - `GET /stopwords`, `POST /stopwords`, `DELETE /stopwords/:text`
/// - `GET /keywords`, `POST /keywords`, `DELETE /keywords/:text`
pub fn lexicon_routes() -> Router<LexiconAppState> {
    Router::new()
        .route("/stopwords", get(list_stopwords).post(add_stopword))
        .route("/stopwords/:text", delete(remove_stopword))
        .route("/keywords", get(list_keywords).post(add_keyword))
        .route("/keywords/:text", delete(remove_keyword))
}

/// Create the lexicon module router, mounted under `/api`.
pub fn lexicon_router() -> Router<LexiconAppState> {
    Router::new().nest("/admin/lexicon", lexicon_routes())
}
