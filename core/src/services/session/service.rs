//! Main session manager implementation

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::RevocationStore;

use super::clock::{Clock, SystemClock};
use super::codec::TokenCodec;
use super::config::SessionConfig;

/// Prefix for revocation marker keys
const REVOCATION_KEY_PREFIX: &str = "bl";

fn marker_key(id: &str) -> String {
    format!("{}:{}", REVOCATION_KEY_PREFIX, id)
}

/// The authoritative state machine for a logical session.
///
/// Composes the clock, the token codec, and the revocation store into the
/// four lifecycle operations: issue, verify, rotate, revoke. The manager
/// itself is stateless; all shared mutable state lives in the store, so
/// every operation is safe to call concurrently from many tasks.
pub struct SessionManager<S: RevocationStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    codec: TokenCodec,
    config: SessionConfig,
}

impl<S: RevocationStore> SessionManager<S> {
    /// Creates a new session manager using wall-clock time
    ///
    /// # Arguments
    ///
    /// * `store` - Revocation store for TTL-bound markers
    /// * `config` - Validated session configuration
    ///
    /// # Returns
    ///
    /// A new `SessionManager` or a configuration error
    pub fn new(store: S, config: SessionConfig) -> DomainResult<Self> {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: RevocationStore, C: Clock> SessionManager<S, C> {
    /// Creates a session manager with an explicit clock
    pub fn with_clock(store: S, config: SessionConfig, clock: C) -> DomainResult<Self> {
        config.validate()?;
        let codec = TokenCodec::new(config.secret.as_bytes(), config.algorithm);
        Ok(Self {
            store,
            clock,
            codec,
            config,
        })
    }

    /// Issues a fresh access/refresh pair for a subject
    ///
    /// Mints a new session id and two token ids; touches neither the
    /// store nor any persistence.
    pub fn issue(&self, subject: &str) -> DomainResult<TokenPair> {
        let session_id = Uuid::new_v4().to_string();
        debug!(%session_id, "issuing token pair");
        self.mint_pair(subject, &session_id)
    }

    /// Verifies a token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The signed token string
    /// * `expected_issuer` - Issuer to match, if any
    /// * `expected_audience` - Audience to match, if any
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims, unchanged
    /// * `Err(DomainError)` - `InvalidToken` on signature/schema/issuer/
    ///   audience mismatch, `TokenExpired` past `exp`, `TokenRevoked` when
    ///   a session or token marker is present, `Store` when the store is
    ///   unreachable (fail closed)
    pub async fn verify(
        &self,
        token: &str,
        expected_issuer: Option<&str>,
        expected_audience: Option<&str>,
    ) -> DomainResult<Claims> {
        let claims = self
            .codec
            .decode(token, expected_issuer, expected_audience)?;

        if claims.is_expired(self.clock.now_timestamp()) {
            return Err(TokenError::TokenExpired.into());
        }

        // A session marker revokes the whole pair (logout); a token marker
        // revokes a single consumed refresh token (rotation). Either can
        // apply independently, so both are checked on every verification.
        if self.store.exists(&marker_key(&claims.sid)).await? {
            return Err(TokenError::TokenRevoked.into());
        }
        if self.store.exists(&marker_key(&claims.jti)).await? {
            return Err(TokenError::TokenRevoked.into());
        }

        Ok(claims)
    }

    /// Writes a revocation marker for a session id or token id
    ///
    /// The marker lives for the refresh-token TTL, the longest window in
    /// which any sibling token could still be presented. Idempotent: an
    /// existing marker has its TTL refreshed.
    pub async fn revoke(&self, id: &str) -> DomainResult<()> {
        debug!(id, "writing revocation marker");
        self.store
            .set_with_ttl(&marker_key(id), self.config.refresh_token_ttl_secs)
            .await
    }

    /// Exchanges a valid refresh token for a new pair
    ///
    /// The consumed token's id is claimed atomically before the new pair
    /// is minted, so a refresh token can be redeemed at most once. The new
    /// pair keeps the subject and session id; both token ids are fresh.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The replacement pair
    /// * `Err(DomainError)` - Verification failures propagate with their
    ///   kind unchanged; a non-refresh token is `TokenTypeMismatch`; a
    ///   lost race with a concurrent rotation is `RotationConflict`
    pub async fn rotate(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.verify(refresh_token, None, None).await?;

        if !claims.is_refresh() {
            return Err(TokenError::TokenTypeMismatch {
                expected: "refresh".to_string(),
            }
            .into());
        }

        // Claim the consumed token before minting its replacement. Losing
        // the claim means a concurrent rotation already redeemed it.
        let claimed = self
            .store
            .set_if_absent(&marker_key(&claims.jti), self.config.refresh_token_ttl_secs)
            .await?;
        if !claimed {
            return Err(TokenError::RotationConflict.into());
        }

        debug!(session_id = %claims.sid, "rotating refresh token");
        self.mint_pair(&claims.sub, &claims.sid)
    }

    /// Mints a pair bound to the given session id
    fn mint_pair(&self, subject: &str, session_id: &str) -> DomainResult<TokenPair> {
        let now = self.clock.now_utc();

        let access = Claims::new_access_token(
            subject,
            session_id,
            now,
            self.config.access_ttl(),
            &self.config.issuer,
            &self.config.audience,
        );
        let refresh =
            Claims::new_refresh_token(subject, session_id, now, self.config.refresh_ttl());

        Ok(TokenPair::new(
            self.codec.encode(&access)?,
            self.codec.encode(&refresh)?,
            self.config.access_token_ttl_secs,
            self.config.refresh_token_ttl_secs,
        ))
    }
}
