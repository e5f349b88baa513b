//! Redis-backed revocation store
//!
//! Markers are plain keys with a TTL; presence is the signal and Redis
//! expiry is the only deletion path. Store failures surface as
//! `DomainError::Store` so the session manager fails closed; an
//! unreachable Redis never reads as "not revoked".

use async_trait::async_trait;
use tracing::debug;

use sv_core::errors::DomainResult;
use sv_core::repositories::RevocationStore;

use crate::cache::RedisClient;

/// Marker value; presence of the key is what matters
const MARKER_VALUE: &str = "revoked";

/// Revocation store implementation over Redis
#[derive(Clone)]
pub struct RedisRevocationStore {
    /// Redis client for store operations
    redis_client: RedisClient,
}

impl RedisRevocationStore {
    /// Create a new Redis-backed revocation store
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn exists(&self, key: &str) -> DomainResult<bool> {
        let present = self.redis_client.exists(key).await?;
        Ok(present)
    }

    async fn set_with_ttl(&self, key: &str, ttl_seconds: u64) -> DomainResult<()> {
        debug!("Writing revocation marker '{}' (ttl {}s)", key, ttl_seconds);
        self.redis_client
            .set_with_expiry(key, MARKER_VALUE, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, ttl_seconds: u64) -> DomainResult<bool> {
        let claimed = self
            .redis_client
            .set_nx_with_expiry(key, MARKER_VALUE, ttl_seconds)
            .await?;
        Ok(claimed)
    }
}
