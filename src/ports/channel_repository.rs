//! ChannelRepository port - idempotent channel storage keyed by title.

use async_trait::async_trait;

use crate::domain::channel::Channel;
use crate::domain::foundation::DomainError;

/// Result of attempting to insert a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Channel was inserted (first time seeing this title).
    Inserted,
    /// A channel with this title already exists.
    AlreadyExists,
}

/// Port for storing topical channels.
///
/// Implementations must enforce title uniqueness (UNIQUE constraint or a
/// single lock) so concurrent inserts of one title create one channel.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find a channel by exact title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Channel>, DomainError>;

    /// Insert the channel unless one with the same title exists.
    ///
    /// Uses `ON CONFLICT DO NOTHING` semantics; a duplicate is not an error.
    async fn insert_if_absent(&self, channel: &Channel) -> Result<SaveResult, DomainError>;
}
