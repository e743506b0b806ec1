//! Sign Up Use Case
//!
//! Checks the store for the email, then creates the user.

use std::sync::Arc;

use kernel::port::UseCase;

use crate::application::config::{AccountConfig, DuplicateCheck};
use crate::domain::entity::user::{User, UserRecord};
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};

pub const USER_ALREADY_EXISTS: &str = "User already exists";

/// Sign up input
#[derive(Clone)]
pub struct SignUpInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignUpInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<User> for SignUpInput {
    fn from(user: User) -> Self {
        let UserRecord {
            id,
            name,
            email,
            password,
        } = user.into_record();
        Self {
            id,
            name,
            email,
            password,
        }
    }
}

impl From<SignUpInput> for UserRecord {
    fn from(input: SignUpInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }
}

impl<R> UseCase<SignUpInput> for SignUpUseCase<R>
where
    R: UserRepository + Sync,
{
    type Output = bool;
    type Error = AccountError;

    async fn execute(&self, input: SignUpInput) -> AccountResult<bool> {
        let existing = self.user_repo.get_by_email(&input.email).await?;

        let rejected = match self.config.duplicate_check {
            DuplicateCheck::RequireExisting => existing.is_none(),
            DuplicateCheck::RejectExisting => existing.is_some(),
        };
        if rejected {
            return Err(AccountError::conflict(USER_ALREADY_EXISTS));
        }

        let record = UserRecord::from(input);
        let stored = self.user_repo.create(&record).await?;

        tracing::info!(
            email = %stored.email(),
            created_at = %stored.created_at,
            "User signed up"
        );

        Ok(true)
    }
}
