//! Product usecase with cache-aside reads and flush-on-write.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use catalog_core::cache::{deserialize_product, product_key, serialize_product, Cache, CacheLookup};
use catalog_core::catalog::Product;
use catalog_core::storage::{ProductRepository, RepositoryError, Result, PRODUCT_ENTITY};

use super::{policy, ProductUsecase};

/// Product usecase backed by a repository and a cache.
///
/// Cached products carry their category snapshot as read from the store.
pub struct CachedProductUsecase<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedProductUsecase<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    /// Creates a new product usecase.
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }
}

#[async_trait]
impl<R, C> ProductUsecase for CachedProductUsecase<R, C>
where
    R: ProductRepository + 'static,
    C: Cache + 'static,
{
    async fn create(&self, product: Product) -> Result<Product> {
        let created = self.repository.create_product(&product).await?;
        policy::invalidate(self.cache.as_ref(), "product created").await;

        tracing::debug!(
            product_id = created.id,
            category_id = created.category_id,
            name = %created.name,
            "Product created"
        );
        Ok(created)
    }

    async fn get_by_id(&self, id: u64) -> Result<Product> {
        let key = product_key(id);

        if let CacheLookup::Hit(product) =
            policy::lookup(self.cache.as_ref(), &key, deserialize_product).await
        {
            return Ok(product);
        }

        let product = self
            .repository
            .get_product(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(PRODUCT_ENTITY, id))?;

        policy::populate(
            self.cache.as_ref(),
            &key,
            serialize_product(&product),
            self.ttl,
        )
        .await;

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product> {
        let updated = self.repository.update_product(&product).await?;
        policy::invalidate(self.cache.as_ref(), "product updated").await;

        tracing::debug!(product_id = updated.id, price = updated.price, "Product updated");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete_product(id).await?;
        policy::invalidate(self.cache.as_ref(), "product deleted").await;

        tracing::debug!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        self.repository.list_products().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    use crate::usecase::mocks::MockCache;
    use catalog_core::catalog::Category;

    struct MockProductRepository {
        products: RwLock<BTreeMap<u64, Product>>,
        next_id: AtomicU64,
        get_calls: AtomicUsize,
        list_calls: AtomicUsize,
    }

    impl MockProductRepository {
        fn new() -> Self {
            Self {
                products: RwLock::new(BTreeMap::new()),
                next_id: AtomicU64::new(1),
                get_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn get_product(&self, id: u64) -> Result<Option<Product>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.read().await.get(&id).cloned())
        }

        async fn list_products(&self) -> Result<Vec<Product>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.read().await.values().cloned().collect())
        }

        async fn create_product(&self, product: &Product) -> Result<Product> {
            if product.category_id == 0 {
                return Err(RepositoryError::InvalidData(
                    "Product references a category that does not exist".to_string(),
                ));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let created = product.clone().with_id(id);
            self.products.write().await.insert(id, created.clone());
            Ok(created)
        }

        async fn update_product(&self, product: &Product) -> Result<Product> {
            let mut products = self.products.write().await;
            let existing = products
                .get_mut(&product.id)
                .ok_or_else(|| RepositoryError::not_found(PRODUCT_ENTITY, product.id))?;
            existing.name = product.name.clone();
            existing.price = product.price;
            existing.category_id = product.category_id;
            Ok(existing.clone())
        }

        async fn delete_product(&self, id: u64) -> Result<()> {
            self.products
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| RepositoryError::not_found(PRODUCT_ENTITY, id))
        }
    }

    fn setup() -> (
        Arc<MockProductRepository>,
        Arc<MockCache>,
        CachedProductUsecase<MockProductRepository, MockCache>,
    ) {
        let repo = Arc::new(MockProductRepository::new());
        let cache = Arc::new(MockCache::new());
        let usecase =
            CachedProductUsecase::new(repo.clone(), cache.clone(), Duration::from_secs(300));
        (repo, cache, usecase)
    }

    fn hammer() -> Product {
        Product::new("Hammer", 9.99, 1).with_category(Category::new("Tools").with_id(1))
    }

    #[tokio::test]
    async fn test_get_by_id_cache_miss_then_hit() {
        let (repo, cache, usecase) = setup();
        let created = usecase.create(hammer()).await.unwrap();

        let first = usecase.get_by_id(created.id).await.unwrap();
        let second = usecase.get_by_id(created.id).await.unwrap();

        assert_eq!(first, created);
        assert_eq!(second, created);
        assert_eq!(repo.get_calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains(&product_key(created.id)).await);
    }

    #[tokio::test]
    async fn test_cached_product_keeps_category_snapshot() {
        let (_repo, _cache, usecase) = setup();
        let created = usecase.create(hammer()).await.unwrap();
        let _ = usecase.get_by_id(created.id).await.unwrap();

        let cached = usecase.get_by_id(created.id).await.unwrap();

        assert_eq!(
            cached.category.map(|c| c.name),
            Some("Tools".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found_and_not_cached() {
        let (_repo, cache, usecase) = setup();

        let result = usecase.get_by_id(1).await;

        assert_eq!(result, Err(RepositoryError::not_found(PRODUCT_ENTITY, 1)));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_non_finite_price_is_served_but_not_cached() {
        let (repo, cache, usecase) = setup();
        repo.products
            .write()
            .await
            .insert(5, Product::new("Broken", f64::NAN, 1).with_id(5));

        let fetched = usecase.get_by_id(5).await.unwrap();

        assert!(fetched.price.is_nan());
        assert_eq!(cache.set_calls(), 0);
    }

    #[tokio::test]
    async fn test_price_update_is_visible_immediately() {
        let (_repo, _cache, usecase) = setup();
        let created = usecase.create(hammer()).await.unwrap();
        assert_eq!(usecase.get_by_id(created.id).await.unwrap().price, 9.99);

        usecase
            .update(Product::new("Hammer", 14.99, 1).with_id(created.id))
            .await
            .unwrap();

        assert_eq!(usecase.get_by_id(created.id).await.unwrap().price, 14.99);
    }

    #[tokio::test]
    async fn test_invalid_reference_returns_error_without_flush() {
        let (_repo, cache, usecase) = setup();
        cache.insert("category:1", b"kept".to_vec()).await;

        let result = usecase.create(Product::new("Orphan", 1.0, 0)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(cache.flush_calls(), 0);
        assert!(cache.contains("category:1").await);
    }

    #[tokio::test]
    async fn test_usecase_persists_unvalidated_values() {
        let (_repo, _cache, usecase) = setup();

        let created = usecase
            .create(Product::new("", -5.0, 1))
            .await
            .unwrap();

        assert_eq!(usecase.get_by_id(created.id).await.unwrap().price, -5.0);
    }

    #[tokio::test]
    async fn test_delete_flushes_and_then_not_found() {
        let (_repo, cache, usecase) = setup();
        let created = usecase.create(hammer()).await.unwrap();
        let _ = usecase.get_by_id(created.id).await.unwrap();

        usecase.delete(created.id).await.unwrap();

        assert!(!cache.contains(&product_key(created.id)).await);
        assert_eq!(cache.flush_calls(), 2);
        assert_eq!(
            usecase.get_by_id(created.id).await,
            Err(RepositoryError::not_found(PRODUCT_ENTITY, created.id))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_repo, cache, usecase) = setup();

        let result = usecase.delete(3).await;

        assert_eq!(result, Err(RepositoryError::not_found(PRODUCT_ENTITY, 3)));
        assert_eq!(cache.flush_calls(), 0);
    }

    #[tokio::test]
    async fn test_get_all_bypasses_cache() {
        let (repo, cache, usecase) = setup();
        usecase.create(hammer()).await.unwrap();
        usecase.create(Product::new("Saw", 19.5, 1)).await.unwrap();

        let products = usecase.get_all().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get_calls(), 0);
    }
}
