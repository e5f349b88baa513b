//! End-to-end session lifecycle against a real Redis
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p sv_infra --test session_integration -- --ignored

use sv_core::errors::{DomainError, TokenError};
use sv_core::services::session::{SessionConfig, SessionManager};
use sv_infra::cache::{CacheConfig, RedisClient, RedisRevocationStore};

async fn test_manager() -> SessionManager<RedisRevocationStore> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = CacheConfig {
        url: std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        pool_size: 5,
        default_ttl: 3600,
    };
    let client = RedisClient::new(config).await.unwrap();
    let store = RedisRevocationStore::new(client);

    let session_config = SessionConfig::new("integration-test-secret")
        .with_access_ttl_secs(60)
        .with_refresh_ttl_secs(180);
    SessionManager::new(store, session_config).unwrap()
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_login_verify_logout() {
    let manager = test_manager().await;

    let pair = manager.issue("user-1").unwrap();
    let claims = manager
        .verify(&pair.access_token, Some("auth.service"), Some("service"))
        .await
        .unwrap();
    assert_eq!(claims.sub, "user-1");

    manager.revoke(&claims.sid).await.unwrap();

    let err = manager
        .verify(&pair.access_token, Some("auth.service"), Some("service"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_refresh_rotation_is_single_use() {
    let manager = test_manager().await;

    let pair = manager.issue("user-2").unwrap();
    let rotated = manager.rotate(&pair.refresh_token).await.unwrap();

    // The replacement pair stays within the same session
    let old = manager.verify(&pair.access_token, None, None).await.unwrap();
    let new = manager
        .verify(&rotated.refresh_token, None, None)
        .await
        .unwrap();
    assert_eq!(old.sid, new.sid);

    // The consumed refresh token is spent
    let err = manager.rotate(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));

    // Clean up the session marker space
    manager.revoke(&new.sid).await.unwrap();
}
