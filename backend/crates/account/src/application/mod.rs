//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod sign_up;

// Re-exports
pub use config::{AccountConfig, DispatchMode, DuplicateCheck, IdStrategy};
pub use sign_up::{SignUpInput, SignUpUseCase};
