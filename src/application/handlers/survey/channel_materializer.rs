//! ChannelMaterializer - ensures one channel exists per selected interest.

use futures::future::try_join_all;
use std::sync::Arc;

use crate::domain::channel::Channel;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ChannelRepository, SaveResult};

/// Command to ensure a channel exists for each title.
#[derive(Debug, Clone)]
pub struct EnsureChannelsCommand {
    pub titles: Vec<String>,
}

/// Result of ensuring channels.
#[derive(Debug, Clone)]
pub struct EnsureChannelsResult {
    /// One channel per distinct title, in input order.
    pub channels: Vec<Channel>,
    /// How many of them were created by this call.
    pub created: usize,
}

/// Idempotently creates channels by title.
///
/// Safe under concurrent invocation: a duplicate-key outcome is success,
/// after which the stored channel is read back.
pub struct ChannelMaterializer {
    repository: Arc<dyn ChannelRepository>,
}

impl ChannelMaterializer {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EnsureChannelsCommand) -> Result<EnsureChannelsResult, DomainError> {
        let mut titles: Vec<String> = Vec::with_capacity(cmd.titles.len());
        for title in cmd.titles {
            if !titles.contains(&title) {
                titles.push(title);
            }
        }

        let ensured = try_join_all(titles.iter().map(|title| self.ensure_one(title))).await?;

        let created = ensured.iter().filter(|(_, r)| *r == SaveResult::Inserted).count();
        let channels = ensured.into_iter().map(|(channel, _)| channel).collect();

        Ok(EnsureChannelsResult { channels, created })
    }

    async fn ensure_one(&self, title: &str) -> Result<(Channel, SaveResult), DomainError> {
        // 1. Build the candidate channel
        let candidate = Channel::new(title)?;

        // 2. Insert unless the title is taken
        let result = self.repository.insert_if_absent(&candidate).await?;

        match result {
            SaveResult::Inserted => {
                tracing::info!(channel_id = %candidate.id, title = %candidate.title, "Channel created");
                Ok((candidate, result))
            }
            SaveResult::AlreadyExists => {
                // 3. Read back the channel that won
                let existing = self
                    .repository
                    .find_by_title(&candidate.title)
                    .await?
                    .ok_or_else(|| {
                        DomainError::new(
                            ErrorCode::InternalError,
                            format!("Channel '{}' reported as existing but not found", candidate.title),
                        )
                    })?;
                Ok((existing, result))
            }
        }
    }
}
