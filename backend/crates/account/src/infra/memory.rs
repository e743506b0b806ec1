//! In-Memory Repository Implementation
//!
//! Append-only list guarded by a tokio `RwLock`. Records are never updated
//! once stored; lookups return the first exact email match.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{StoredUser, UserRecord};
use crate::domain::repository::UserRepository;
use crate::error::AccountResult;

/// Process-local user store
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<StoredUser>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of users
    pub fn with_users(users: impl IntoIterator<Item = StoredUser>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<StoredUser>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email() == email).cloned())
    }

    async fn create(&self, record: &UserRecord) -> AccountResult<StoredUser> {
        let stored = StoredUser::new(record.clone());
        self.users.write().await.push(stored.clone());

        tracing::debug!(email = %stored.email(), "Stored user in memory");

        Ok(stored)
    }
}
