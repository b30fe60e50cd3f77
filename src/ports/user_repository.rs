//! UserRepository port - read and update the external user record.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{UserInterestState, UserRecord};

/// Port onto the user store owned by the profile service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID. Returns `None` if the user does not exist.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError>;

    /// Replace the user's interest fields.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user was removed in the meantime
    /// - `DatabaseError` on persistence failure
    async fn update_interests(
        &self,
        id: &UserId,
        interests: &UserInterestState,
    ) -> Result<(), DomainError>;
}
