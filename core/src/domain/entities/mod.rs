//! Domain entities representing session tokens and their claims.

pub mod token;

// Re-export commonly used types
pub use token::{Claims, TokenPair, TokenType};
