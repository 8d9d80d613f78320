use async_trait::async_trait;
use std::time::Duration;

/// Snapshot of cache occupancy, exposed through the admin endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
}

/// Cache trait - abstraction over response caching backends.
///
/// Values are serialized JSON; the service owns (de)serialization so the
/// cache stays payload-agnostic.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a fresh value, or `None` on miss or expiry.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value with an optional TTL; `None` means the entry never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Drop every entry.
    async fn clear(&self);

    /// Current occupancy, counting entries that have not yet been evicted.
    async fn stats(&self) -> CacheStats;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
