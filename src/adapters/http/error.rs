//! Shared error response handling for the HTTP adapters.
//!
//! Every feature router converts `DomainError` into a JSON body of the form
//! `{ "code": "...", "message": "..." }`. Storage and internal failures are
//! reported with a generic message so no backend detail leaks to clients.

use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::interests::RETRY_AFTER_DETAIL;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    #[serde(rename = "code")]
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError.to_string(), INTERNAL_MESSAGE)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Domain error mapping
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::validation("body", rejection.body_text()))
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound | ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::InvalidStateTransition
        | ErrorCode::ClassificationUnavailable
        | ErrorCode::DatabaseError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = status_for(error.code());

        if status.is_server_error() {
            tracing::error!(code = %error.code(), error = %error.message(), "Request failed");
            return (status, Json(ErrorResponse::internal())).into_response();
        }

        let body = match error.detail("field") {
            Some(field) => ErrorResponse::with_details(
                error.code().to_string(),
                error.message(),
                serde_json::json!({ "field": field }),
            ),
            None => ErrorResponse::new(error.code().to_string(), error.message()),
        };
        let mut response = (status, Json(body)).into_response();

        if let Some(value) = error
            .detail(RETRY_AFTER_DETAIL)
            .and_then(|secs| HeaderValue::from_str(secs).ok())
        {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }

        response
    }
}
