//! SurveyAnalysis aggregate and the result types of one analysis run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, Timestamp, UserId, ValidationError};

/// One question/answer pair from a submitted survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub question: String,
    pub answer: String,
}

impl SurveyResponse {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Validated, non-empty list of survey responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySubmission {
    responses: Vec<SurveyResponse>,
}

impl SurveySubmission {
    /// # Errors
    ///
    /// `EmptyField("questions")` if there are no responses.
    pub fn new(responses: Vec<SurveyResponse>) -> Result<Self, ValidationError> {
        if responses.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self { responses })
    }

    pub fn responses(&self) -> &[SurveyResponse] {
        &self.responses
    }

    /// Answers in submission order.
    pub fn answers(&self) -> Vec<String> {
        self.responses.iter().map(|r| r.answer.clone()).collect()
    }

    pub fn into_responses(self) -> Vec<SurveyResponse> {
        self.responses
    }
}

/// Core extraction result: always present once extraction ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestExtraction {
    pub selected_interests: Vec<String>,
    pub matched_categories: Vec<String>,
}

/// Result of a full analysis run.
///
/// `classifier_categories` is `None` when the external classifier was
/// unavailable; `top_categories` then falls back to the fuzzy matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub extraction: InterestExtraction,
    pub classifier_categories: Option<Vec<String>>,
}

impl AnalysisOutcome {
    /// Number of categories reported back to the caller.
    pub const TOP_CATEGORY_LIMIT: usize = 3;

    pub fn interests(&self) -> &[String] {
        &self.extraction.selected_interests
    }

    /// Classifier labels when available, otherwise the fuzzy matches;
    /// at most [`Self::TOP_CATEGORY_LIMIT`] either way.
    pub fn top_categories(&self) -> Vec<String> {
        self.classifier_categories
            .as_ref()
            .unwrap_or(&self.extraction.matched_categories)
            .iter()
            .take(Self::TOP_CATEGORY_LIMIT)
            .cloned()
            .collect()
    }
}

/// Persisted record of a user's latest survey analysis.
///
/// One logical record per user; replaced only once the edit window elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnalysis {
    pub id: AnalysisId,
    pub user_id: UserId,
    pub responses: Vec<SurveyResponse>,
    pub raw_answers: Vec<String>,
    pub selected_interests: Vec<String>,
    pub matched_categories: Vec<String>,
    pub top_categories: Vec<String>,
    pub last_edited_at: Timestamp,
}

impl SurveyAnalysis {
    /// Builds a fresh analysis record from a completed run.
    pub fn new(
        user_id: UserId,
        submission: SurveySubmission,
        outcome: &AnalysisOutcome,
        now: Timestamp,
    ) -> Self {
        let raw_answers = submission.answers();
        Self {
            id: AnalysisId::new(),
            user_id,
            responses: submission.into_responses(),
            raw_answers,
            selected_interests: outcome.extraction.selected_interests.clone(),
            matched_categories: outcome.extraction.matched_categories.clone(),
            top_categories: outcome.top_categories(),
            last_edited_at: now,
        }
    }
}
