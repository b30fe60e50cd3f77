//! HTTP handlers for the survey endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{
    AnalyzeSurveyCommand, AnalyzeSurveyConfig, AnalyzeSurveyHandler, ChannelMaterializer,
};
use crate::domain::foundation::{CommandMetadata, DomainError, UserId};
use crate::domain::interests::SurveyResponse;
use crate::ports::{
    AuditLog, ChannelRepository, InterestClassifier, LexiconRepository, SurveyAnalysisRepository,
    UserRepository,
};

use super::dto::{AnalyzeSurveyRequest, AnalyzeSurveyResponse};
use crate::adapters::http::error::ApiError;

/// Header carrying a caller-supplied correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies for the survey endpoint.
#[derive(Clone)]
pub struct SurveyAppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub lexicon_repository: Arc<dyn LexiconRepository>,
    pub analysis_repository: Arc<dyn SurveyAnalysisRepository>,
    pub channel_repository: Arc<dyn ChannelRepository>,
    pub audit_log: Arc<dyn AuditLog>,
    pub classifier: Arc<dyn InterestClassifier>,
    pub config: AnalyzeSurveyConfig,
}

impl SurveyAppState {
    pub fn analyze_survey_handler(&self) -> AnalyzeSurveyHandler {
        AnalyzeSurveyHandler::new(
            self.user_repository.clone(),
            self.lexicon_repository.clone(),
            self.analysis_repository.clone(),
            self.classifier.clone(),
            self.audit_log.clone(),
            ChannelMaterializer::new(self.channel_repository.clone()),
            self.config.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/survey/analyze - Analyze survey answers into interests and categories
pub async fn analyze_survey(
    State(state): State<SurveyAppState>,
    headers: HeaderMap,
    body: Result<Json<AnalyzeSurveyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = to_command(request)?;
    let metadata = request_metadata(&headers);

    let result = state.analyze_survey_handler().handle(cmd, metadata).await?;

    Ok((StatusCode::OK, Json(AnalyzeSurveyResponse::from(result))))
}

fn to_command(request: AnalyzeSurveyRequest) -> Result<AnalyzeSurveyCommand, DomainError> {
    let user_id = UserId::new(request.user_id.unwrap_or_default())?;

    let questions = request
        .survey_response
        .and_then(|survey| survey.questions)
        .unwrap_or_default();
    if questions.is_empty() {
        return Err(DomainError::validation(
            "questions",
            "Survey response must contain at least one question",
        ));
    }

    Ok(AnalyzeSurveyCommand {
        user_id,
        responses: questions.into_iter().map(SurveyResponse::from).collect(),
    })
}

fn request_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("api");
    match headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::survey::dto::{QuestionAnswer, SurveyResponseBody};
    use crate::domain::foundation::ErrorCode;

    fn request(user_id: Option<&str>, questions: Option<Vec<QuestionAnswer>>) -> AnalyzeSurveyRequest {
        AnalyzeSurveyRequest {
            user_id: user_id.map(str::to_string),
            survey_response: Some(SurveyResponseBody { questions }),
        }
    }

    fn qa(answer: &str) -> QuestionAnswer {
        QuestionAnswer {
            question: "What do you enjoy?".to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn missing_user_id_is_a_validation_error() {
        let err = to_command(request(None, Some(vec![qa("music")]))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("userId"));
    }

    #[test]
    fn empty_questions_is_a_validation_error() {
        let err = to_command(request(Some("user-1"), Some(vec![]))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some("questions"));
    }

    #[test]
    fn missing_survey_response_is_a_validation_error() {
        let req = AnalyzeSurveyRequest {
            user_id: Some("user-1".to_string()),
            survey_response: None,
        };
        assert!(to_command(req).is_err());
    }

    #[test]
    fn converts_questions_in_order() {
        let cmd = to_command(request(Some("user-1"), Some(vec![qa("music"), qa("art")]))).unwrap();
        assert_eq!(cmd.user_id.as_str(), "user-1");
        assert_eq!(cmd.responses.len(), 2);
        assert_eq!(cmd.responses[1].answer, "art");
    }

    #[test]
    fn correlation_id_header_is_propagated() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "req-42".parse().unwrap());
        assert_eq!(request_metadata(&headers).correlation_id(), "req-42");
    }

    #[test]
    fn correlation_id_is_generated_when_absent() {
        let metadata = request_metadata(&HeaderMap::new());
        assert!(!metadata.correlation_id().is_empty());
    }
}
