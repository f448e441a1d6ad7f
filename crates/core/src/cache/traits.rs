use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key/value cache store with per-key expiration and a bulk clear.
///
/// Implementations must be safe for concurrent use: a single handle is shared
/// by reference across every usecase and request.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Removes every key held by this cache.
    async fn flush_all(&self) -> Result<()>;
}
