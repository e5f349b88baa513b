//! Token-specific error types.
//!
//! Every verification failure is reported with its specific kind intact;
//! the transport layer decides what a caller gets to see.

use thiserror::Error;

/// Token lifecycle errors
///
/// `TokenExpired` and `TokenRevoked` are deliberately distinct: an expired
/// token can still be recovered through rotation, a revoked one forces
/// re-authentication.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Refresh token was already rotated concurrently")]
    RotationConflict,

    #[error("Expected a {expected} token")]
    TokenTypeMismatch { expected: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
