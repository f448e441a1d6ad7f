//! Cache-consistency policy shared by the catalog usecases.
//!
//! The cache never fails a request: read faults collapse into a miss, and
//! population or invalidation faults are logged and dropped.

use std::fmt::Display;
use std::time::Duration;

use catalog_core::cache::{Cache, CacheLookup};

/// Reads `key` and decodes it, collapsing every failure into a miss.
pub(crate) async fn lookup<C, T, E, D>(cache: &C, key: &str, decode: D) -> CacheLookup<T>
where
    C: Cache + ?Sized,
    E: Display,
    D: FnOnce(&[u8]) -> Result<T, E>,
{
    let decoded = match cache.get(key).await {
        Ok(bytes) => bytes.map(|bytes| decode(&bytes)).transpose().map_err(|err| {
            tracing::warn!(key, error = %err, "Discarding undecodable cache payload");
        }),
        Err(err) => {
            tracing::warn!(key, error = %err, "Cache read failed, falling back to store");
            Err(())
        }
    };

    let lookup = CacheLookup::from_decoded(decoded);
    if lookup.is_hit() {
        tracing::trace!(key, "Cache hit");
    } else {
        tracing::trace!(key, "Cache miss");
    }
    lookup
}

/// Stores an encoded entity under `key`. Failures are logged and ignored.
pub(crate) async fn populate<C, E>(cache: &C, key: &str, encoded: Result<Vec<u8>, E>, ttl: Duration)
where
    C: Cache + ?Sized,
    E: Display,
{
    let bytes = match encoded {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to encode entity for cache");
            return;
        }
    };

    if let Err(err) = cache.set(key, &bytes, Some(ttl)).await {
        tracing::warn!(key, error = %err, "Failed to populate cache");
    }
}

/// Clears the whole cache after a successful write. Failures are logged and ignored.
///
/// Cached products embed their category, so any write may stale entries of
/// the other entity kind.
pub(crate) async fn invalidate<C>(cache: &C, cause: &'static str)
where
    C: Cache + ?Sized,
{
    if let Err(err) = cache.flush_all().await {
        tracing::warn!(cause, error = %err, "Failed to invalidate cache");
    }
}
