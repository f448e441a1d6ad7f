//! Test doubles shared by the usecase tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::cache::{Cache, CacheError, Result as CacheResult};

/// Cache that records calls and can be told to fail.
#[derive(Default)]
pub struct MockCache {
    store: RwLock<HashMap<String, Vec<u8>>>,
    last_ttl: RwLock<Option<Duration>>,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
    flush_calls: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_flushes: AtomicBool,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, key: &str, value: Vec<u8>) {
        self.store.write().await.insert(key.to_string(), value);
    }

    pub async fn get_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key).cloned()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains_key(key)
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.read().await
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn flush_calls(&self) -> usize {
        self.flush_calls.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_flushes(&self) {
        self.fail_flushes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("connection refused".to_string()));
        }
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::OperationFailed("OOM command not allowed".to_string()));
        }
        *self.last_ttl.write().await = ttl;
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.remove(key);
        Ok(())
    }

    async fn flush_all(&self) -> CacheResult<()> {
        self.flush_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_flushes.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("broken pipe".to_string()));
        }
        self.store.write().await.clear();
        Ok(())
    }
}
