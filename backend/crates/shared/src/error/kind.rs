//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps failures to HTTP status codes.

use serde::Serialize;

/// Error classification
///
/// Two client kinds that carry their own status, plus one catch-all for
/// failures that are not classified.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 400 - missing or malformed input
    BadRequest,
    /// 409 - resource state conflicts with the request
    Conflict,
    /// 500 - anything not classified above
    InternalServerError,
}

impl ErrorKind {
    /// HTTP status code for this kind
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// Server-side kinds keep their message out of the response body.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, ErrorKind::InternalServerError)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
