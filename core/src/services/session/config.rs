//! Configuration for the session manager

use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Default issuer claim for access tokens
pub const DEFAULT_ISSUER: &str = "auth.service";

/// Default audience claim for access tokens
pub const DEFAULT_AUDIENCE: &str = "service";

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Configuration for the session manager
///
/// Constructed once at process start and handed to the manager; nothing in
/// this crate reads the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signing secret
    pub secret: String,

    /// Signing algorithm (symmetric, HS256 by default)
    pub algorithm: Algorithm,

    /// Access token lifetime in seconds
    pub access_token_ttl_secs: u64,

    /// Refresh token lifetime in seconds, must exceed the access lifetime
    pub refresh_token_ttl_secs: u64,

    /// Issuer claim stamped on access tokens
    pub issuer: String,

    /// Audience claim stamped on access tokens
    pub audience: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            access_token_ttl_secs: 900,      // 15 minutes
            refresh_token_ttl_secs: 604_800, // 7 days
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime in seconds
    pub fn with_access_ttl_secs(mut self, seconds: u64) -> Self {
        self.access_token_ttl_secs = seconds;
        self
    }

    /// Set the refresh token lifetime in seconds
    pub fn with_refresh_ttl_secs(mut self, seconds: u64) -> Self {
        self.refresh_token_ttl_secs = seconds;
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set the audience claim
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Access token lifetime as a duration
    pub fn access_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_ttl_secs as i64)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_ttl_secs as i64)
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Validate the configuration invariants
    ///
    /// Both lifetimes must be positive, the access lifetime strictly
    /// shorter than the refresh lifetime, and the algorithm one the
    /// shared secret can actually drive.
    pub fn validate(&self) -> DomainResult<()> {
        if self.secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "signing secret must not be empty".to_string(),
            });
        }
        // The codec derives both keys from the shared secret, so only
        // symmetric algorithms can ever verify
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Configuration {
                message: "signing algorithm must be symmetric (HS256/HS384/HS512)".to_string(),
            });
        }
        if self.access_token_ttl_secs == 0 {
            return Err(DomainError::Configuration {
                message: "access token TTL must be positive".to_string(),
            });
        }
        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs {
            return Err(DomainError::Configuration {
                message: "refresh token TTL must exceed access token TTL".to_string(),
            });
        }
        Ok(())
    }
}
