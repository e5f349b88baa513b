//! Revocation store trait defining the interface for TTL-bound markers.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Store trait for revocation markers.
///
/// A marker is a write-once key whose presence is the signal; its value is
/// irrelevant and it disappears only through TTL expiry. Implementations
/// must make each operation atomic at the key level; the session manager
/// relies on `set_if_absent` to make refresh-token rotation single-use
/// without any in-process locking.
///
/// # Failure semantics
/// A store error must surface as `DomainError::Store`. Callers treat it as
/// an infrastructure failure and fail closed; an unreachable store never
/// means "not revoked".
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Check whether a marker exists for the given key
    ///
    /// # Returns
    /// * `Ok(true)` - A live (non-expired) marker is present
    /// * `Ok(false)` - No marker
    /// * `Err(DomainError)` - Store unreachable or misbehaving
    async fn exists(&self, key: &str) -> DomainResult<bool>;

    /// Write a marker with the given time-to-live
    ///
    /// Overwriting an existing marker refreshes its TTL, which is an
    /// acceptable no-op for revocation semantics.
    async fn set_with_ttl(&self, key: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Atomically write a marker only if none exists
    ///
    /// # Returns
    /// * `Ok(true)` - The marker was written by this call
    /// * `Ok(false)` - A live marker was already present
    /// * `Err(DomainError)` - Store unreachable or misbehaving
    async fn set_if_absent(&self, key: &str, ttl_seconds: u64) -> DomainResult<bool>;
}
