//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, repository trait
//! - `application/` - Sign-up use case and configuration
//! - `infra/` - In-memory and PostgreSQL repositories
//! - `presentation/` - Controller, DTOs, HTTP handlers, router
//!
//! Dependencies point inward: controller → use case → repository trait.
//!
//! ## Features
//! - Sign-up with presence validation of id, name, e-mail and password
//! - Existence check by e-mail before creation
//! - Framework-neutral controller, mounted on axum by the router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::AppError,
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryUserRepository as MemoryStore;
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

#[cfg(test)]
mod tests;
