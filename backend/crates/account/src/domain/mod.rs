//! Domain Layer
//!
//! Contains the user entity and the repository contract.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::user::{StoredUser, User, UserRecord};
pub use repository::UserRepository;
