//! Infrastructure Layer
//!
//! Repository adapters. Neither is part of the core; any store that
//! implements `UserRepository` can replace them.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
