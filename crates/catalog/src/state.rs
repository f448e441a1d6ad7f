//! Shared application state.
//!
//! Handlers only see the usecase trait objects. The concrete wiring (SQLite
//! plus the cache backend chosen by feature flag) happens once at startup.

use std::sync::Arc;
use std::time::Duration;

use catalog_core::cache::Cache;

use crate::config::Config;
use crate::storage::SqliteRepository;
use crate::usecase::{
    CachedCategoryUsecase, CachedProductUsecase, CategoryUsecase, ProductUsecase,
};

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub category_usecase: Arc<dyn CategoryUsecase>,
    pub product_usecase: Arc<dyn ProductUsecase>,
}

impl AppState {
    /// Wires both usecases over one repository and one shared cache handle.
    fn build<C>(repository: Arc<SqliteRepository>, cache: Arc<C>, ttl: Duration) -> Self
    where
        C: Cache + 'static,
    {
        Self {
            category_usecase: Arc::new(CachedCategoryUsecase::new(
                repository.clone(),
                cache.clone(),
                ttl,
            )),
            product_usecase: Arc::new(CachedProductUsecase::new(repository, cache, ttl)),
        }
    }

    /// Creates AppState with SQLite storage and an in-memory cache.
    #[cfg(feature = "memory")]
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        use crate::cache::MemoryCache;

        let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

        tracing::info!(
            sqlite_path = %config.sqlite_path,
            max_entries = config.cache_max_entries,
            ttl_seconds = config.cache_ttl_seconds,
            "Using SQLite storage with in-memory cache"
        );

        Ok(Self::build(repository, cache, config.cache_ttl()))
    }

    /// Creates AppState with SQLite storage and a Redis cache.
    #[cfg(feature = "redis")]
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        use crate::cache::RedisCache;

        let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        let cache = Arc::new(
            RedisCache::new(
                &config.redis_url,
                config.cache_op_timeout(),
                config.cache_connect_timeout(),
            )
            .await?,
        );

        tracing::info!(
            sqlite_path = %config.sqlite_path,
            ttl_seconds = config.cache_ttl_seconds,
            "Using SQLite storage with Redis cache"
        );

        Ok(Self::build(repository, cache, config.cache_ttl()))
    }

    /// In-memory SQLite with an in-memory cache, for tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        use crate::cache::MemoryCache;

        let repository = Arc::new(
            SqliteRepository::new_in_memory()
                .await
                .expect("in-memory SQLite should open"),
        );
        let cache = Arc::new(MemoryCache::new(1_000));
        Self::build(repository, cache, Duration::from_secs(300))
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use catalog_core::catalog::{Category, Product};

    #[tokio::test]
    async fn test_new_wires_shared_backends() {
        let config = Config {
            cache_ttl_seconds: 300,
            cache_max_entries: 100,
            cache_op_timeout_ms: 2_000,
            cache_connect_timeout_seconds: 5,
            sqlite_path: ":memory:".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
        };

        let state = AppState::new(&config).await.unwrap();

        let tools = state
            .category_usecase
            .create(Category::new("Tools"))
            .await
            .unwrap();
        let hammer = state
            .product_usecase
            .create(Product::new("Hammer", 9.99, tools.id))
            .await
            .unwrap();
        assert_eq!(hammer.category, Some(tools));
    }
}
