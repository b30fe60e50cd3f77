//! SurveyAnalysisRepository port - one analysis record per user.
//!
//! The edit window is enforced twice: an early read in the handler, and
//! again atomically by [`SurveyAnalysisRepository::save_if_window_elapsed`]
//! so that of two concurrent analyses for one user only one is stored.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::interests::SurveyAnalysis;

/// Outcome of a conditional save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSave {
    /// The analysis was inserted or replaced the previous one.
    Saved,
    /// A record edited after the cutoff exists; nothing was written.
    WindowClosed { last_edited_at: Timestamp },
}

/// Port for persisting survey analyses.
#[async_trait]
pub trait SurveyAnalysisRepository: Send + Sync {
    /// The user's current analysis, if any.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<SurveyAnalysis>, DomainError>;

    /// Insert or replace the user's analysis, but only if no record exists
    /// or the existing one was last edited at or before `cutoff`.
    ///
    /// Check and write are a single atomic step.
    async fn save_if_window_elapsed(
        &self,
        analysis: &SurveyAnalysis,
        cutoff: Timestamp,
    ) -> Result<WindowSave, DomainError>;
}
