//! Application Configuration
//!
//! Configuration for the Account application layer.

use std::str::FromStr;

/// How the sign-up use case reacts to the existence lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateCheck {
    /// Fail with Conflict when no user with the email exists yet.
    /// Documented contract of the service; creation only goes through for
    /// an email that is already known to the store.
    #[default]
    RequireExisting,
    /// Fail with Conflict when a user with the email already exists.
    RejectExisting,
}

/// How the controller runs the use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Spawn the use case and answer 201 without waiting for it.
    /// Use case failures are logged, never returned.
    #[default]
    Detached,
    /// Await the use case and report its outcome in the response.
    Awaited,
}

/// Where the controller gets the id of a new user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// The literal string `"id"`
    #[default]
    Placeholder,
    /// A fresh UUID v4
    Uuid,
}

/// Unrecognized configuration value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value for {setting}: {value}")]
pub struct UnknownSetting {
    pub setting: &'static str,
    pub value: String,
}

impl FromStr for DuplicateCheck {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "require_existing" => Ok(DuplicateCheck::RequireExisting),
            "reject_existing" => Ok(DuplicateCheck::RejectExisting),
            other => Err(UnknownSetting {
                setting: ENV_DUPLICATE_CHECK,
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for DispatchMode {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detached" => Ok(DispatchMode::Detached),
            "awaited" => Ok(DispatchMode::Awaited),
            other => Err(UnknownSetting {
                setting: ENV_DISPATCH,
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(IdStrategy::Placeholder),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(UnknownSetting {
                setting: ENV_ID_STRATEGY,
                value: other.to_string(),
            }),
        }
    }
}

pub const ENV_DUPLICATE_CHECK: &str = "ACCOUNT_DUPLICATE_CHECK";
pub const ENV_DISPATCH: &str = "ACCOUNT_DISPATCH";
pub const ENV_ID_STRATEGY: &str = "ACCOUNT_ID_STRATEGY";

/// Account application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    pub duplicate_check: DuplicateCheck,
    pub dispatch: DispatchMode,
    pub id_strategy: IdStrategy,
}

impl AccountConfig {
    /// Configuration for local development: rejects duplicates, awaits the
    /// use case, generates UUIDs.
    pub fn development() -> Self {
        Self {
            duplicate_check: DuplicateCheck::RejectExisting,
            dispatch: DispatchMode::Awaited,
            id_strategy: IdStrategy::Uuid,
        }
    }

    /// Read settings from the process environment.
    ///
    /// Unset variables keep their default; unknown values are logged and
    /// also keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            duplicate_check: setting(&lookup, ENV_DUPLICATE_CHECK),
            dispatch: setting(&lookup, ENV_DISPATCH),
            id_strategy: setting(&lookup, ENV_ID_STRATEGY),
        }
    }
}

fn setting<T, F>(lookup: &F, key: &str) -> T
where
    T: FromStr<Err = UnknownSetting> + Default,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|raw| raw.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Ignoring invalid account setting, using default");
            T::default()
        }
        None => T::default(),
    }
}
