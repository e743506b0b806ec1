//! User Entity
//!
//! A `User` can only be obtained through [`User::new`], which checks that
//! every field of the creation record is present.

use chrono::{DateTime, Utc};

use crate::error::{AccountError, AccountResult};

/// User creation record
#[derive(Clone, PartialEq, Eq, Default)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Validated user
///
/// Invariant: `id`, `name`, `email` and `password` are all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    record: UserRecord,
}

impl User {
    /// Validate a creation record.
    ///
    /// Fields are checked in the order id, name, email, password; the first
    /// empty one is reported.
    pub fn new(record: UserRecord) -> AccountResult<Self> {
        let checks = [
            (&record.id, "Id is required"),
            (&record.name, "Name is required"),
            (&record.email, "E-mail is required"),
            (&record.password, "Password is required"),
        ];

        if let Some((_, message)) = checks.iter().find(|(value, _)| value.is_empty()) {
            return Err(AccountError::bad_request(*message));
        }

        Ok(Self { record })
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    pub fn password(&self) -> &str {
        &self.record.password
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn into_record(self) -> UserRecord {
        self.record
    }
}

/// User as held by the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub record: UserRecord,
    /// Assigned by the store on creation
    pub created_at: DateTime<Utc>,
}

impl StoredUser {
    pub fn new(record: UserRecord) -> Self {
        Self {
            record,
            created_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }
}
