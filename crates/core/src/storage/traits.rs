use async_trait::async_trait;

use crate::catalog::{Category, Product};

use super::Result;

/// Repository for category operations.
///
/// Every write runs inside a transaction scoped to that single write and
/// returns the row as persisted, with store-assigned `id` and timestamps.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Gets a live category by its ID.
    async fn get_category(&self, id: u64) -> Result<Option<Category>>;

    /// Lists all live categories, ordered by ID.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Inserts a new category. The incoming `id` is ignored.
    async fn create_category(&self, category: &Category) -> Result<Category>;

    /// Saves every mutable column of an existing category.
    async fn update_category(&self, category: &Category) -> Result<Category>;

    /// Soft-deletes a category by its ID.
    async fn delete_category(&self, id: u64) -> Result<()>;
}

/// Repository for product operations.
///
/// Reads resolve the referenced category into `Product::category`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a live product by its ID, with its category resolved.
    async fn get_product(&self, id: u64) -> Result<Option<Product>>;

    /// Lists all live products, ordered by ID, with their categories resolved.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Inserts a new product. The incoming `id` and `category` snapshot are ignored.
    async fn create_product(&self, product: &Product) -> Result<Product>;

    /// Saves every mutable column of an existing product.
    async fn update_product(&self, product: &Product) -> Result<Product>;

    /// Soft-deletes a product by its ID.
    async fn delete_product(&self, id: u64) -> Result<()>;
}
