//! Session service module for token lifecycle management
//!
//! This module handles all session-related operations including:
//! - Access/refresh token pair issuance
//! - Token verification against expiry and the revocation store
//! - Refresh token rotation with single-use enforcement
//! - Session and token revocation

mod clock;
mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use codec::TokenCodec;
pub use config::SessionConfig;
pub use service::SessionManager;
