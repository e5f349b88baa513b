//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::TokenError;

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// `Store` is an infrastructure failure, not an authentication decision:
/// it must never be conflated with `TokenRevoked` or `InvalidToken`. The
/// session manager fails closed when the store is unreachable.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Revocation store failure: {message}")]
    Store { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the token-specific taxonomy
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// True if this error is a token verification outcome rather than an
    /// infrastructure or configuration failure
    pub fn is_token_error(&self) -> bool {
        matches!(self, DomainError::Token(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
