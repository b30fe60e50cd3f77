//! Integration tests for the lexicon administration endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use interest_channels::adapters::classifier::DisabledClassifier;
use interest_channels::adapters::http::{api_router, LexiconAppState, SurveyAppState};
use interest_channels::adapters::memory::{
    InMemoryAuditLog, InMemoryChannelRepository, InMemoryLexiconRepository,
    InMemorySurveyAnalysisRepository, InMemoryUserRepository,
};
use interest_channels::application::AnalyzeSurveyConfig;
use interest_channels::domain::foundation::UserId;
use interest_channels::domain::user::UserRecord;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn router_with(lexicon: InMemoryLexiconRepository) -> Router {
    let lexicon = Arc::new(lexicon);
    let users = InMemoryUserRepository::new()
        .with_user(UserRecord::new(
            UserId::new("user-1").unwrap(),
            "student@example.com",
        ))
        .await;

    let survey = SurveyAppState {
        user_repository: Arc::new(users),
        lexicon_repository: lexicon.clone(),
        analysis_repository: Arc::new(InMemorySurveyAnalysisRepository::new()),
        channel_repository: Arc::new(InMemoryChannelRepository::new()),
        audit_log: Arc::new(InMemoryAuditLog::new()),
        classifier: Arc::new(DisabledClassifier),
        config: AnalyzeSurveyConfig::default(),
    };

    api_router(survey, LexiconAppState::new(lexicon))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Stopwords
// =============================================================================

#[tokio::test]
async fn stopwords_can_be_added_listed_and_removed() {
    let router = router_with(InMemoryLexiconRepository::new()).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/admin/lexicon/stopwords",
        Some(json!({ "text": "  The " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["text"], "the");
    assert_eq!(body["kind"], "stopword");

    let (status, body) = send(&router, "GET", "/api/admin/lexicon/stopwords", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"], json!(["the"]));

    let (status, _) = send(&router, "DELETE", "/api/admin/lexicon/stopwords/The", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&router, "GET", "/api/admin/lexicon/stopwords", None).await;
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn duplicate_stopword_is_conflict() {
    let router = router_with(InMemoryLexiconRepository::seeded(["the"], Vec::<&str>::new())).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/admin/lexicon/stopwords",
        Some(json!({ "text": "THE" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn blank_stopword_is_bad_request() {
    let router = router_with(InMemoryLexiconRepository::new()).await;

    let (status, _) = send(
        &router,
        "POST",
        "/api/admin/lexicon/stopwords",
        Some(json!({ "text": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_missing_stopword_is_not_found() {
    let router = router_with(InMemoryLexiconRepository::new()).await;

    let (status, body) = send(&router, "DELETE", "/api/admin/lexicon/stopwords/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Multi-word keywords
// =============================================================================

#[tokio::test]
async fn keywords_keep_insertion_order() {
    let router = router_with(InMemoryLexiconRepository::new()).await;

    for text in ["web development", "Machine Learning"] {
        let (status, _) = send(
            &router,
            "POST",
            "/api/admin/lexicon/keywords",
            Some(json!({ "text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&router, "GET", "/api/admin/lexicon/keywords", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"], json!(["web development", "machine learning"]));
}

#[tokio::test]
async fn single_word_keyword_is_bad_request() {
    let router = router_with(InMemoryLexiconRepository::new()).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/admin/lexicon/keywords",
        Some(json!({ "text": "music" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn keyword_delete_accepts_encoded_path() {
    let router = router_with(InMemoryLexiconRepository::seeded(
        Vec::<&str>::new(),
        ["web development"],
    ))
    .await;

    let (status, _) = send(
        &router,
        "DELETE",
        "/api/admin/lexicon/keywords/web%20development",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&router, "GET", "/api/admin/lexicon/keywords", None).await;
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn added_keyword_drives_phrase_extraction() {
    let router = router_with(InMemoryLexiconRepository::seeded(
        ["is", "my", "i", "do", "daily"],
        Vec::<&str>::new(),
    ))
    .await;

    let (status, _) = send(
        &router,
        "POST",
        "/api/admin/lexicon/keywords",
        Some(json!({ "text": "web development" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let survey = json!({
        "userId": "user-1",
        "surveyResponse": { "questions": [
            { "question": "q1", "answer": "web development is my passion" },
            { "question": "q2", "answer": "I do web development daily" }
        ] }
    });
    let (status, body) = send(&router, "POST", "/api/survey/analyze", Some(survey)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["interests"], json!(["web development", "passion"]));
}
