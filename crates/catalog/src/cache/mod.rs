//! Cache store adapters.
//!
//! Concrete implementations of `catalog_core::cache::Cache`. The backend wired
//! into the service is selected at compile time:
//!
//! - `memory` (default): in-process LRU cache with lazy TTL expiry
//! - `redis`: Redis through a multiplexed connection manager
//!
//! The in-memory cache is also compiled for tests regardless of the feature set.

#[cfg(any(feature = "memory", test))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(any(feature = "memory", test))]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
