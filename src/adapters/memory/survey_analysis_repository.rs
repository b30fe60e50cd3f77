//! In-memory survey analysis store.
//!
//! The window check and the write happen under one write lock, which gives
//! the same atomicity as the conditional upsert of the Postgres adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::interests::SurveyAnalysis;
use crate::ports::{SurveyAnalysisRepository, WindowSave};

#[derive(Debug, Clone, Default)]
pub struct InMemorySurveyAnalysisRepository {
    analyses: Arc<RwLock<HashMap<UserId, SurveyAnalysis>>>,
}

impl InMemorySurveyAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an analysis unconditionally (test setup).
    pub async fn insert(&self, analysis: SurveyAnalysis) {
        self.analyses
            .write()
            .await
            .insert(analysis.user_id.clone(), analysis);
    }

    pub async fn len(&self) -> usize {
        self.analyses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.analyses.read().await.is_empty()
    }
}

#[async_trait]
impl SurveyAnalysisRepository for InMemorySurveyAnalysisRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<SurveyAnalysis>, DomainError> {
        Ok(self.analyses.read().await.get(user_id).cloned())
    }

    async fn save_if_window_elapsed(
        &self,
        analysis: &SurveyAnalysis,
        cutoff: Timestamp,
    ) -> Result<WindowSave, DomainError> {
        let mut analyses = self.analyses.write().await;

        if let Some(existing) = analyses.get(&analysis.user_id) {
            if existing.last_edited_at > cutoff {
                return Ok(WindowSave::WindowClosed {
                    last_edited_at: existing.last_edited_at,
                });
            }
        }

        analyses.insert(analysis.user_id.clone(), analysis.clone());
        Ok(WindowSave::Saved)
    }
}
