//! Domain layer containing the session token entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
