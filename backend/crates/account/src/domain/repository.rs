//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{StoredUser, UserRecord};
use crate::error::AccountResult;

/// User repository trait
///
/// The repository is the sole owner of durable user state.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user by exact email match. No match is `Ok(None)`.
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<StoredUser>>;

    /// Store a new user and return it as persisted
    async fn create(&self, record: &UserRecord) -> AccountResult<StoredUser>;
}
