//! Category usecase with cache-aside reads and flush-on-write.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use catalog_core::cache::{
    category_key, deserialize_category, serialize_category, Cache, CacheLookup,
};
use catalog_core::catalog::Category;
use catalog_core::storage::{CategoryRepository, RepositoryError, Result, CATEGORY_ENTITY};

use super::{policy, CategoryUsecase};

/// Category usecase backed by a repository and a cache.
///
/// - **Reads**: cache first; on miss read the repository and populate the cache
/// - **Writes**: one repository write, then flush the whole cache
/// - **Lists**: always served by the repository
pub struct CachedCategoryUsecase<R, C>
where
    R: CategoryRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedCategoryUsecase<R, C>
where
    R: CategoryRepository,
    C: Cache,
{
    /// Creates a new category usecase.
    ///
    /// # Arguments
    ///
    /// * `repository` - The relational store
    /// * `cache` - The shared cache handle
    /// * `ttl` - Time-to-live for cached categories
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }
}

#[async_trait]
impl<R, C> CategoryUsecase for CachedCategoryUsecase<R, C>
where
    R: CategoryRepository + 'static,
    C: Cache + 'static,
{
    async fn create(&self, category: Category) -> Result<Category> {
        let created = self.repository.create_category(&category).await?;
        policy::invalidate(self.cache.as_ref(), "category created").await;

        tracing::debug!(category_id = created.id, name = %created.name, "Category created");
        Ok(created)
    }

    async fn get_by_id(&self, id: u64) -> Result<Category> {
        let key = category_key(id);

        if let CacheLookup::Hit(category) =
            policy::lookup(self.cache.as_ref(), &key, deserialize_category).await
        {
            return Ok(category);
        }

        let category = self
            .repository
            .get_category(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(CATEGORY_ENTITY, id))?;

        policy::populate(
            self.cache.as_ref(),
            &key,
            serialize_category(&category),
            self.ttl,
        )
        .await;

        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category> {
        let updated = self.repository.update_category(&category).await?;
        policy::invalidate(self.cache.as_ref(), "category updated").await;

        tracing::debug!(category_id = updated.id, name = %updated.name, "Category updated");
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete_category(id).await?;
        policy::invalidate(self.cache.as_ref(), "category deleted").await;

        tracing::debug!(category_id = id, "Category deleted");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Category>> {
        self.repository.list_categories().await
    }
}
