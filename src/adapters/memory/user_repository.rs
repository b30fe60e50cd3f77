//! In-memory user store for testing and database-less development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{UserInterestState, UserRecord};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user record (stands in for the external profile service).
    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Builder form of [`Self::insert`] for test setup.
    pub async fn with_user(self, user: UserRecord) -> Self {
        self.insert(user).await;
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn update_interests(
        &self,
        id: &UserId,
        interests: &UserInterestState,
    ) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
        })?;
        user.interests = interests.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn update_replaces_interest_state() {
        let id = UserId::new("u-1").unwrap();
        let repo = InMemoryUserRepository::new()
            .with_user(UserRecord::new(id.clone(), "u1@example.com"))
            .await;

        let state = UserInterestState::from_analysis(
            &["chess".to_string()],
            &["Gaming".to_string()],
            Timestamp::now(),
        );
        repo.update_interests(&id, &state).await.unwrap();

        let user = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(user.interests, state);
    }

    #[tokio::test]
    async fn update_of_unknown_user_fails() {
        let repo = InMemoryUserRepository::new();
        let err = repo
            .update_interests(&UserId::new("ghost").unwrap(), &UserInterestState::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserNotFound);
    }
}
