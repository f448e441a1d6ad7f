//! SQLite repository implementation.
//!
//! Every write opens a transaction, performs its single mutation, re-reads the
//! affected row and commits, so callers get back exactly what a later read sees.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use catalog_core::catalog::{Category, Product};
use catalog_core::storage::{
    CategoryRepository, ProductRepository, RepositoryError, Result, CATEGORY_ENTITY,
    PRODUCT_ENTITY,
};

use super::conversions::{format_datetime, id_to_sql, row_to_category, row_to_product};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Treats "zero rows affected" as a missing row.
fn ensure_affected(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository for categories and products.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database. Data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn get_category(&self, id: u64) -> Result<Option<Category>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORY_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id_to_sql(id)], row_to_category) {
                    Ok(category) => Ok(Some(category)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, CATEGORY_ENTITY, id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_CATEGORIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, CATEGORY_ENTITY))
    }

    async fn create_category(&self, category: &Category) -> Result<Category> {
        let name = category.name.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::INSERT_CATEGORY, rusqlite::params![name, now])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                let created = tx
                    .query_row(schema::SELECT_CATEGORY_BY_ID, [id], row_to_category)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(created)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, CATEGORY_ENTITY))
    }

    async fn update_category(&self, category: &Category) -> Result<Category> {
        let id = category.id;
        let name = category.name.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_CATEGORY,
                        rusqlite::params![id_to_sql(id), name, now],
                    )
                    .map_err(wrap_err)?;
                ensure_affected(rows)?;
                let updated = tx
                    .query_row(schema::SELECT_CATEGORY_BY_ID, [id_to_sql(id)], row_to_category)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(updated)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, CATEGORY_ENTITY, id))
    }

    async fn delete_category(&self, id: u64) -> Result<()> {
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::SOFT_DELETE_CATEGORY,
                        rusqlite::params![id_to_sql(id), now],
                    )
                    .map_err(wrap_err)?;
                ensure_affected(rows)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, CATEGORY_ENTITY, id))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn get_product(&self, id: u64) -> Result<Option<Product>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id_to_sql(id)], row_to_product) {
                    Ok(product) => Ok(Some(product)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, PRODUCT_ENTITY, id))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PRODUCTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, PRODUCT_ENTITY))
    }

    async fn create_product(&self, product: &Product) -> Result<Product> {
        let name = product.name.clone();
        let price = product.price;
        let category_id = id_to_sql(product.category_id);
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![name, price, category_id, now],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                let created = tx
                    .query_row(schema::SELECT_PRODUCT_BY_ID, [id], row_to_product)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(created)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, PRODUCT_ENTITY))
    }

    async fn update_product(&self, product: &Product) -> Result<Product> {
        let id = product.id;
        let name = product.name.clone();
        let price = product.price;
        let category_id = id_to_sql(product.category_id);
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_PRODUCT,
                        rusqlite::params![id_to_sql(id), name, price, category_id, now],
                    )
                    .map_err(wrap_err)?;
                ensure_affected(rows)?;
                let updated = tx
                    .query_row(schema::SELECT_PRODUCT_BY_ID, [id_to_sql(id)], row_to_product)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(updated)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, PRODUCT_ENTITY, id))
    }

    async fn delete_product(&self, id: u64) -> Result<()> {
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::SOFT_DELETE_PRODUCT,
                        rusqlite::params![id_to_sql(id), now],
                    )
                    .map_err(wrap_err)?;
                ensure_affected(rows)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, PRODUCT_ENTITY, id))
    }
}
