//! # SessionVault Core
//!
//! Core domain layer for SessionVault session management.
//! This crate contains the token entities, the revocation store interface,
//! the token codec, and the session manager that composes them.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
