//! Redis cache implementation.
//!
//! Every command runs under a per-operation deadline; a missed deadline is
//! reported as `CacheError::ConnectionFailed` like any other connectivity fault.
//! `flush_all` issues `FLUSHDB`, so the cache should own its Redis database.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use catalog_core::cache::{Cache, Result};

use super::error::{map_redis_error, timeout_error};

/// Redis cache backend using a connection manager for reconnects.
#[derive(Clone)]
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
    op_timeout: Duration,
}

impl RedisCache {
    /// Connects to Redis and verifies the server answers `PING`.
    ///
    /// Both the connection and the `PING` are bounded by `connect_timeout`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the server cannot be reached in time.
    pub async fn new(url: &str, op_timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let mut conn = bounded(
            "CONNECT",
            connect_timeout,
            redis::aio::ConnectionManager::new(client),
        )
        .await?;

        let _: String = bounded(
            "PING",
            connect_timeout,
            redis::cmd("PING").query_async(&mut conn),
        )
        .await?;

        tracing::info!(?op_timeout, "connected to redis");

        Ok(Self { conn, op_timeout })
    }
}

/// Runs a Redis future under a deadline.
async fn bounded<T, F>(command: &str, deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = redis::RedisResult<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(map_redis_error),
        Err(_) => Err(timeout_error(command, deadline)),
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        bounded("GET", self.op_timeout, conn.get(key)).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();
        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                bounded(
                    "SETEX",
                    self.op_timeout,
                    conn.set_ex::<_, _, ()>(key, value, seconds),
                )
                .await
            }
            None => bounded("SET", self.op_timeout, conn.set::<_, _, ()>(key, value)).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        bounded("DEL", self.op_timeout, conn.del::<_, ()>(key)).await
    }

    async fn flush_all(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        bounded(
            "FLUSHDB",
            self.op_timeout,
            redis::cmd("FLUSHDB").query_async(&mut conn),
        )
        .await
    }
}
