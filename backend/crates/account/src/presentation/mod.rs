//! Presentation Layer
//!
//! Controller, DTOs, HTTP handlers and router.

pub mod controller;
pub mod dto;
pub mod handlers;
pub mod router;

pub use controller::SignUpController;
pub use handlers::AccountAppState;
pub use router::account_router;
