//! Catalog usecases: the cache-consistency layer between handlers and storage.
//!
//! Reads go cache first and fall back to the relational store; writes go to
//! the store and then clear the whole cache; lists always hit the store.

mod category;
#[cfg(test)]
pub(crate) mod mocks;
mod policy;
mod product;

use async_trait::async_trait;

use catalog_core::catalog::{Category, Product};
use catalog_core::storage::Result;

pub use category::CachedCategoryUsecase;
pub use product::CachedProductUsecase;

/// Operations exposed to handlers for categories.
#[async_trait]
pub trait CategoryUsecase: Send + Sync {
    /// Persists a new category and returns it with its assigned ID.
    async fn create(&self, category: Category) -> Result<Category>;

    /// Returns a live category, or `NotFound`.
    async fn get_by_id(&self, id: u64) -> Result<Category>;

    /// Saves a category's mutable fields under `category.id`.
    async fn update(&self, category: Category) -> Result<Category>;

    /// Soft-deletes a category.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Lists live categories by ascending ID.
    async fn get_all(&self) -> Result<Vec<Category>>;
}

/// Operations exposed to handlers for products.
#[async_trait]
pub trait ProductUsecase: Send + Sync {
    /// Persists a new product and returns it with its assigned ID and category.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Returns a live product with its category, or `NotFound`.
    async fn get_by_id(&self, id: u64) -> Result<Product>;

    /// Saves a product's mutable fields under `product.id`.
    async fn update(&self, product: Product) -> Result<Product>;

    /// Soft-deletes a product.
    async fn delete(&self, id: u64) -> Result<()>;

    /// Lists live products by ascending ID.
    async fn get_all(&self) -> Result<Vec<Product>>;
}
