//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};

use super::r#trait::RevocationStore;

/// Mock revocation store for testing
///
/// Keeps markers in memory as key → expiry-timestamp entries and judges
/// TTLs against a steerable time source, so tests can cross expiry
/// boundaries without sleeping. The same time source can back a test
/// clock to keep the store and the manager in agreement.
#[derive(Clone)]
pub struct MockRevocationStore {
    entries: Arc<RwLock<HashMap<String, i64>>>,
    now: Arc<AtomicI64>,
    failing: Arc<AtomicBool>,
}

impl MockRevocationStore {
    /// Create a new mock store with its own time source
    pub fn new(start: i64) -> Self {
        Self::with_time_source(Arc::new(AtomicI64::new(start)))
    }

    /// Create a mock store sharing an external time source
    pub fn with_time_source(now: Arc<AtomicI64>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            now,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle to the time source, for wiring a test clock
    pub fn time_source(&self) -> Arc<AtomicI64> {
        Arc::clone(&self.now)
    }

    /// Advance the store's notion of now
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    /// Make every subsequent operation fail with a store error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// TTL remaining for a key, if a live marker exists
    pub async fn ttl_of(&self, key: &str) -> Option<u64> {
        let now = self.now.load(Ordering::SeqCst);
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|&&exp| exp > now)
            .map(|&exp| (exp - now) as u64)
    }

    fn check_failure(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Store {
                message: "mock store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn exists(&self, key: &str) -> DomainResult<bool> {
        self.check_failure()?;
        let now = self.now.load(Ordering::SeqCst);
        let entries = self.entries.read().await;
        Ok(entries.get(key).is_some_and(|&exp| exp > now))
    }

    async fn set_with_ttl(&self, key: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.check_failure()?;
        let now = self.now.load(Ordering::SeqCst);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), now + ttl_seconds as i64);
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, ttl_seconds: u64) -> DomainResult<bool> {
        self.check_failure()?;
        let now = self.now.load(Ordering::SeqCst);
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|&exp| exp > now) {
            return Ok(false);
        }
        entries.insert(key.to_string(), now + ttl_seconds as i64);
        Ok(true)
    }
}
