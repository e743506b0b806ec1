//! User identifiers
//!
//! A new user gets either the fixed placeholder id or a random UUID v4.
//! Stores keep the id as an opaque string.

use std::fmt;
use uuid::Uuid;

/// Id every user receives when no generator is configured
pub const PLACEHOLDER_USER_ID: &str = "id";

/// Identifier of a user being created
///
/// ```
/// use kernel::id::UserId;
/// assert_eq!(UserId::placeholder().as_str(), "id");
/// assert_eq!(UserId::random().as_str().len(), 36);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_USER_ID.to_string())
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_USER_ID
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
