//! Account Error Types
//!
//! Two classified kinds carry their own status code (`BadRequest`,
//! `Conflict`). Everything else is unclassified and has no status code of
//! its own; the HTTP boundary normalizes those to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Missing or invalid input field
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate resource
    #[error("{0}")]
    Conflict(String),

    /// Repository failure reported by a non-SQL store
    #[error("Repository error: {0}")]
    Repository(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AccountError::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AccountError::Conflict(message.into())
    }

    /// Status code carried by the error itself; `None` when unclassified
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AccountError::BadRequest(_) => Some(StatusCode::BAD_REQUEST.as_u16()),
            AccountError::Conflict(_) => Some(StatusCode::CONFLICT.as_u16()),
            AccountError::Repository(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                None
            }
        }
    }

    pub fn is_classified(&self) -> bool {
        self.status_code().is_some()
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::BadRequest(_) => ErrorKind::BadRequest,
            AccountError::Conflict(_) => ErrorKind::Conflict,
            AccountError::Repository(_) | AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Repository(msg) => {
                tracing::error!(message = %msg, "Account repository error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::BadRequest(msg) | AccountError::Conflict(msg) => {
                tracing::warn!(status = ?self.status_code(), message = %msg, "Sign-up rejected");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AccountError::BadRequest(err.message().to_string()),
            ErrorKind::Conflict => AccountError::Conflict(err.message().to_string()),
            _ => AccountError::Internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(err: serde_json::Error) -> Self {
        AppError::from(err).into()
    }
}
