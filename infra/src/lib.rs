//! # Infrastructure Layer
//!
//! Concrete implementations of the `sv_core` interfaces backed by external
//! services. Currently this means the Redis revocation store: a client with
//! connection management and retry logic, and the store adapter the session
//! manager consumes.

// Re-export core types for convenience
pub use sv_core::errors::*;

/// Cache module - Redis client and the revocation store
pub mod cache;

use thiserror::Error;

/// Infrastructure-specific errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Connection establishment failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for sv_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        sv_core::errors::DomainError::Store {
            message: err.to_string(),
        }
    }
}

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for the Redis connection

    use serde::{Deserialize, Serialize};

    /// Redis cache configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CacheConfig {
        /// Redis connection URL
        pub url: String,

        /// Connection pool size
        pub pool_size: u32,

        /// Default TTL for cached values in seconds
        pub default_ttl: u64,
    }

    impl Default for CacheConfig {
        fn default() -> Self {
            Self {
                url: "redis://localhost:6379".to_string(),
                pool_size: 10,
                default_ttl: 3600,
            }
        }
    }
}
