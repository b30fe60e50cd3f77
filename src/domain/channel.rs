//! Channel - a standing topical discussion group, one per interest title.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, Timestamp, ValidationError};

/// Maximum title length accepted for a channel.
pub const MAX_TITLE_LENGTH: usize = 200;

/// A topical discussion channel.
///
/// Titles are unique. Channels are created lazily, at most once per
/// distinct title, and never deleted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub title: String,
    pub created_at: Timestamp,
}

impl Channel {
    /// Creates a new channel for the given interest title.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `OutOfRange` if the title exceeds [`MAX_TITLE_LENGTH`]
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let len = title.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                MAX_TITLE_LENGTH as i64,
                len as i64,
            ));
        }

        Ok(Self {
            id: ChannelId::new(),
            title,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a channel from storage.
    pub fn reconstitute(id: ChannelId, title: String, created_at: Timestamp) -> Self {
        Self {
            id,
            title,
            created_at,
        }
    }
}
