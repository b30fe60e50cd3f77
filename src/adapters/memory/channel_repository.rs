//! In-memory channel store keyed by title.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::channel::Channel;
use crate::domain::foundation::DomainError;
use crate::ports::{ChannelRepository, SaveResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryChannelRepository {
    channels: Arc<RwLock<HashMap<String, Channel>>>,
}

impl InMemoryChannelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored channels, sorted by title.
    pub async fn all(&self) -> Vec<Channel> {
        let mut channels: Vec<Channel> = self.channels.read().await.values().cloned().collect();
        channels.sort_by(|a, b| a.title.cmp(&b.title));
        channels
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Channel>, DomainError> {
        Ok(self.channels.read().await.get(title).cloned())
    }

    async fn insert_if_absent(&self, channel: &Channel) -> Result<SaveResult, DomainError> {
        let mut channels = self.channels.write().await;
        if channels.contains_key(&channel.title) {
            return Ok(SaveResult::AlreadyExists);
        }
        channels.insert(channel.title.clone(), channel.clone());
        Ok(SaveResult::Inserted)
    }
}
