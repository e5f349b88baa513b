//! Token entities for the access/refresh session pair.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token type discriminant carried in the `typ` claim.
///
/// Every minted token states what it is, so the manager never has to
/// infer access-vs-refresh from which fields happen to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for the JWT payload.
///
/// `sid` correlates the access/refresh pair minted together; `jti` is
/// unique per token and never reused, even across rotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Session identifier shared by an access/refresh pair
    pub sid: String,

    /// Subject (user identifier)
    pub sub: String,

    /// Issued at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,

    /// JWT ID, unique per minted token
    pub jti: String,

    /// Token type discriminant
    pub typ: TokenType,

    /// Issuer, set on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience, set on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The user identifier
    /// * `session_id` - The session identifier shared with the sibling refresh token
    /// * `now` - Current time, provided by the caller's clock
    /// * `ttl` - Access token lifetime
    /// * `issuer` - Issuer claim
    /// * `audience` - Audience claim
    pub fn new_access_token(
        subject: &str,
        session_id: &str,
        now: DateTime<Utc>,
        ttl: Duration,
        issuer: &str,
        audience: &str,
    ) -> Self {
        Self {
            sid: session_id.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
            typ: TokenType::Access,
            iss: Some(issuer.to_string()),
            aud: Some(audience.to_string()),
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// Refresh tokens carry the base claims only; issuer and audience
    /// are an access-token concern.
    pub fn new_refresh_token(
        subject: &str,
        session_id: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sid: session_id.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
            typ: TokenType::Refresh,
            iss: None,
            aud: None,
        }
    }

    /// Checks whether the claims have expired at the given moment
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }

    /// Remaining validity in seconds at the given moment, zero if expired
    pub fn remaining_lifetime(&self, now: i64) -> u64 {
        if self.exp > now {
            (self.exp - now) as u64
        } else {
            0
        }
    }

    /// True if this is a refresh token
    pub fn is_refresh(&self) -> bool {
        self.typ == TokenType::Refresh
    }
}

/// Token pair returned to the caller on login and rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: u64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: u64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: u64,
        refresh_expires_in: u64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
