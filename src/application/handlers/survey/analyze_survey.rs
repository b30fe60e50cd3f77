//! AnalyzeSurveyHandler - turns one survey submission into interests,
//! categories, channels and an audit entry.
//!
//! Stages (see [`AnalysisStage`]):
//!
//! 1. Validate input, check the edit window, load the user
//! 2. Extract interests under a single lexicon snapshot
//! 3. Fuzzy-match categories, corroborate with the external classifier
//! 4. Persist the analysis (window re-checked atomically)
//! 5. Update the user, ensure channels, append the audit entry
//!
//! Validation, rate-limit and missing-user failures happen before any write.
//! Later failures leave earlier writes in place; channel and audit writes are
//! safe to replay.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::audit::AuditEntry;
use crate::domain::channel::Channel;
use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, StateMachine, Timestamp, UserId,
};
use crate::domain::interests::{
    candidate_labels, AnalysisOutcome, AnalysisStage, CategoryMatcher, EditWindow,
    InterestExtraction, InterestExtractor, SurveyAnalysis, SurveyResponse, SurveySubmission,
};
use crate::domain::user::{UserInterestState, UserRecord};
use crate::ports::{
    AuditLog, InterestClassifier, LexiconRepository, SurveyAnalysisRepository, UserRepository,
    WindowSave,
};

use super::channel_materializer::{ChannelMaterializer, EnsureChannelsCommand};

/// Command to analyze a user's survey answers.
#[derive(Debug, Clone)]
pub struct AnalyzeSurveyCommand {
    pub user_id: UserId,
    pub responses: Vec<SurveyResponse>,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeSurveyResult {
    pub outcome: AnalysisOutcome,
    pub top_categories: Vec<String>,
    pub channels: Vec<Channel>,
}

/// Tunables for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzeSurveyConfig {
    pub edit_window: EditWindow,
    pub matcher: CategoryMatcher,
    /// How many taxonomy names are offered to the classifier.
    pub candidate_label_limit: usize,
    /// Upper bound on the classifier call, independent of the HTTP client.
    pub classifier_timeout: Duration,
}

impl Default for AnalyzeSurveyConfig {
    fn default() -> Self {
        Self {
            edit_window: EditWindow::default(),
            matcher: CategoryMatcher::default(),
            candidate_label_limit: 10,
            classifier_timeout: Duration::from_secs(10),
        }
    }
}

/// Handler for the analyze-survey command.
pub struct AnalyzeSurveyHandler {
    users: Arc<dyn UserRepository>,
    lexicon: Arc<dyn LexiconRepository>,
    analyses: Arc<dyn SurveyAnalysisRepository>,
    classifier: Arc<dyn InterestClassifier>,
    audit_log: Arc<dyn AuditLog>,
    materializer: ChannelMaterializer,
    config: AnalyzeSurveyConfig,
}

impl AnalyzeSurveyHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        lexicon: Arc<dyn LexiconRepository>,
        analyses: Arc<dyn SurveyAnalysisRepository>,
        classifier: Arc<dyn InterestClassifier>,
        audit_log: Arc<dyn AuditLog>,
        materializer: ChannelMaterializer,
        config: AnalyzeSurveyConfig,
    ) -> Self {
        Self {
            users,
            lexicon,
            analyses,
            classifier,
            audit_log,
            materializer,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeSurveyCommand,
        metadata: CommandMetadata,
    ) -> Result<AnalyzeSurveyResult, DomainError> {
        let mut stage = AnalysisStage::Received;
        let user_id = cmd.user_id.clone();

        match self.run(cmd, &mut stage).await {
            Ok(result) => {
                tracing::info!(
                    user_id = %user_id,
                    correlation_id = %metadata.correlation_id(),
                    interests = ?result.outcome.interests(),
                    top_categories = ?result.top_categories,
                    channels_created = result.channels.len(),
                    "Survey analyzed"
                );
                Ok(result)
            }
            Err(err) => {
                let failed_at = stage;
                stage = stage.transition_to(AnalysisStage::Error).unwrap_or(AnalysisStage::Error);
                if failed_at.has_side_effects() {
                    tracing::error!(
                        user_id = %user_id,
                        correlation_id = %metadata.correlation_id(),
                        failed_at = ?failed_at,
                        stage = ?stage,
                        error = %err,
                        "Survey analysis failed after partial writes"
                    );
                } else {
                    tracing::debug!(
                        user_id = %user_id,
                        failed_at = ?failed_at,
                        error = %err,
                        "Survey analysis rejected"
                    );
                }
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        cmd: AnalyzeSurveyCommand,
        stage: &mut AnalysisStage,
    ) -> Result<AnalyzeSurveyResult, DomainError> {
        let now = Timestamp::now();
        let window = self.config.edit_window;

        // 1. Validate input
        let submission = SurveySubmission::new(cmd.responses)?;

        // 2. Early edit-window check
        let previous = self.analyses.find_by_user(&cmd.user_id).await?;
        window.check(previous.map(|a| a.last_edited_at), now)?;
        advance(stage, AnalysisStage::WindowChecked)?;

        // 3. Load user
        let user = self.find_user(&cmd.user_id).await?;

        // 4. Extract interests under one lexicon snapshot
        let lexicon = self.lexicon.snapshot().await?;
        let answers = submission.answers();
        let selected_interests = InterestExtractor::extract(&answers, &lexicon);
        tracing::debug!(
            user_id = %user.id,
            answers = answers.len(),
            interests = selected_interests.len(),
            "Interests extracted"
        );
        advance(stage, AnalysisStage::Extracted)?;

        // 5. Categorize
        let matched_categories = self.config.matcher.match_all(&selected_interests);
        let corpus = InterestExtractor::build_corpus(&answers);
        let classifier_categories = self.classify(&corpus).await;
        let outcome = AnalysisOutcome {
            extraction: InterestExtraction {
                selected_interests,
                matched_categories,
            },
            classifier_categories,
        };
        let top_categories = outcome.top_categories();
        advance(stage, AnalysisStage::Categorized)?;

        // 6. Persist analysis (window re-checked atomically)
        let analysis = SurveyAnalysis::new(user.id.clone(), submission, &outcome, now);
        match self
            .analyses
            .save_if_window_elapsed(&analysis, window.cutoff(now))
            .await?
        {
            WindowSave::Saved => {}
            WindowSave::WindowClosed { last_edited_at } => {
                return Err(window.rejection(last_edited_at, now));
            }
        }
        advance(stage, AnalysisStage::Persisted)?;

        // 7. Update user interests
        let state = UserInterestState::from_analysis(outcome.interests(), &top_categories, now);
        self.users.update_interests(&user.id, &state).await?;
        advance(stage, AnalysisStage::UserUpdated)?;

        // 8. Ensure channels
        let ensured = self
            .materializer
            .handle(EnsureChannelsCommand {
                titles: outcome.interests().to_vec(),
            })
            .await
            .map_err(post_persist_error)?;
        advance(stage, AnalysisStage::ChannelsEnsured)?;

        // 9. Audit
        let entry = AuditEntry::interests_updated(user.id.clone(), user.label.clone());
        self.audit_log.append(&entry).await?;
        advance(stage, AnalysisStage::Logged)?;

        advance(stage, AnalysisStage::Done)?;

        Ok(AnalyzeSurveyResult {
            outcome,
            top_categories,
            channels: ensured.channels,
        })
    }

    async fn find_user(&self, id: &UserId) -> Result<UserRecord, DomainError> {
        self.users.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
        })
    }

    /// Calls the classifier; any failure degrades to `None`.
    async fn classify(&self, corpus: &str) -> Option<Vec<String>> {
        let labels = candidate_labels(self.config.candidate_label_limit);
        let timeout = self.config.classifier_timeout;

        match tokio::time::timeout(timeout, self.classifier.classify(corpus, &labels)).await {
            Ok(Ok(ranked)) => Some(
                ranked
                    .into_iter()
                    .take(AnalysisOutcome::TOP_CATEGORY_LIMIT)
                    .collect(),
            ),
            Ok(Err(e)) if e.is_expected() => {
                tracing::debug!(classifier = self.classifier.name(), error = %e, "Classifier skipped");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    classifier = self.classifier.name(),
                    code = %ErrorCode::ClassificationUnavailable,
                    error = %e,
                    "Classifier unavailable, using fuzzy categories"
                );
                None
            }
            Err(_) => {
                tracing::warn!(
                    classifier = self.classifier.name(),
                    code = %ErrorCode::ClassificationUnavailable,
                    timeout_ms = timeout.as_millis() as u64,
                    "Classifier timed out, using fuzzy categories"
                );
                None
            }
        }
    }
}

/// Validated stage transition, traced at debug level.
fn advance(stage: &mut AnalysisStage, next: AnalysisStage) -> Result<(), DomainError> {
    *stage = stage
        .transition_to(next)
        .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
    tracing::debug!(stage = ?*stage, "Analysis stage");
    Ok(())
}

/// Input was accepted and written by this point, so a validation error here
/// is a server fault rather than a bad request.
fn post_persist_error(err: DomainError) -> DomainError {
    match err.code() {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => DomainError::new(
            ErrorCode::InternalError,
            format!("Channel materialization failed: {}", err.message()),
        ),
        _ => err,
    }
}
