//! Cache client trait and error types.

use async_trait::async_trait;

/// Errors that can occur while talking to the cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Process-wide cache client handle.
///
/// The service connects to the cache at startup and reports its health; no
/// request path reads from or writes to it.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis connection manager
/// - [`crate::infrastructure::cache::NullCache`] - used when Redis is not configured
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;
}
