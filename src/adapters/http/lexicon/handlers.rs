//! HTTP handlers for lexicon administration.
//!
//! Stopwords and multi-word keywords share one set of handlers; the
//! per-kind endpoint functions only pin the `LexicalKind`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{
    AddLexicalEntryCommand, AddLexicalEntryHandler, ListLexiconHandler, ListLexiconQuery,
    RemoveLexicalEntryCommand, RemoveLexicalEntryHandler,
};
use crate::domain::foundation::CommandMetadata;
use crate::domain::interests::LexicalKind;
use crate::ports::LexiconRepository;

use super::dto::{AddLexicalEntryRequest, LexicalEntryResponse, LexiconListResponse};
use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies for the lexicon admin endpoints.
#[derive(Clone)]
pub struct LexiconAppState {
    pub lexicon_repository: Arc<dyn LexiconRepository>,
}

impl LexiconAppState {
    pub fn new(lexicon_repository: Arc<dyn LexiconRepository>) -> Self {
        Self { lexicon_repository }
    }

    pub fn list_handler(&self) -> ListLexiconHandler {
        ListLexiconHandler::new(self.lexicon_repository.clone())
    }

    pub fn add_handler(&self) -> AddLexicalEntryHandler {
        AddLexicalEntryHandler::new(self.lexicon_repository.clone())
    }

    pub fn remove_handler(&self) -> RemoveLexicalEntryHandler {
        RemoveLexicalEntryHandler::new(self.lexicon_repository.clone())
    }
}

fn admin_metadata() -> CommandMetadata {
    CommandMetadata::new().with_source("admin")
}

// ════════════════════════════════════════════════════════════════════════════════
// Shared operations
// ════════════════════════════════════════════════════════════════════════════════

async fn list(state: &LexiconAppState, kind: LexicalKind) -> Result<impl IntoResponse, ApiError> {
    let entries = state.list_handler().handle(ListLexiconQuery { kind }).await?;
    Ok(Json(LexiconListResponse { kind, entries }))
}

async fn add(
    state: &LexiconAppState,
    kind: LexicalKind,
    body: Result<Json<AddLexicalEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = AddLexicalEntryCommand {
        kind,
        text: request.text,
    };

    let entry = state.add_handler().handle(cmd, admin_metadata()).await?;

    Ok((StatusCode::CREATED, Json(LexicalEntryResponse::from(entry))))
}

async fn remove(
    state: &LexiconAppState,
    kind: LexicalKind,
    text: String,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RemoveLexicalEntryCommand { kind, text };
    state.remove_handler().handle(cmd, admin_metadata()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Stopwords
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/lexicon/stopwords
pub async fn list_stopwords(
    State(state): State<LexiconAppState>,
) -> Result<impl IntoResponse, ApiError> {
    list(&state, LexicalKind::Stopword).await
}

/// POST /api/admin/lexicon/stopwords
pub async fn add_stopword(
    State(state): State<LexiconAppState>,
    body: Result<Json<AddLexicalEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    add(&state, LexicalKind::Stopword, body).await
}

/// DELETE /api/admin/lexicon/stopwords/:text
pub async fn remove_stopword(
    State(state): State<LexiconAppState>,
    Path(text): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    remove(&state, LexicalKind::Stopword, text).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Multi-word keywords
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/lexicon/keywords
pub async fn list_keywords(
    State(state): State<LexiconAppState>,
) -> Result<impl IntoResponse, ApiError> {
    list(&state, LexicalKind::MultiWordKeyword).await
}

/// POST /api/admin/lexicon/keywords
pub async fn add_keyword(
    State(state): State<LexiconAppState>,
    body: Result<Json<AddLexicalEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    add(&state, LexicalKind::MultiWordKeyword, body).await
}

/// DELETE /api/admin/lexicon/keywords/:text
pub async fn remove_keyword(
    State(state): State<LexiconAppState>,
    Path(text): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    remove(&state, LexicalKind::MultiWordKeyword, text).await
}
