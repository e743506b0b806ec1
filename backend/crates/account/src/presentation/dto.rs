//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request body
///
/// Every field is optional at this layer; presence is checked by the
/// `User` entity so the error names the missing field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
