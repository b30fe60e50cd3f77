//! View onto the externally owned user record.
//!
//! This crate never creates or deletes users; it only reads them and
//! replaces their interest state after a successful analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::interests::MAX_INTERESTS;

/// Interest fields on the user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInterestState {
    /// At most [`MAX_INTERESTS`] free-form interests.
    pub custom_interests: Vec<String>,
    pub categorized_interests: Vec<String>,
    pub last_survey_at: Option<Timestamp>,
}

impl UserInterestState {
    /// Interest state after an analysis at `at`.
    pub fn from_analysis(
        interests: &[String],
        top_categories: &[String],
        at: Timestamp,
    ) -> Self {
        Self {
            custom_interests: interests.iter().take(MAX_INTERESTS).cloned().collect(),
            categorized_interests: top_categories.to_vec(),
            last_survey_at: Some(at),
        }
    }
}

/// The parts of a user this crate reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    /// Human-readable label (email) used as audit subject.
    pub label: String,
    pub interests: UserInterestState,
}

impl UserRecord {
    pub fn new(id: UserId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            interests: UserInterestState::default(),
        }
    }
}
