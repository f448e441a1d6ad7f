//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use catalog_core::catalog::{Category, Product};
use chrono::{DateTime, Utc};
use rusqlite::Row;

/// Column index where the joined category starts in product queries.
const PRODUCT_CATEGORY_OFFSET: usize = 7;

/// Convert a SQLite row to a Category.
///
/// Expected columns: id, name, created_at, updated_at, deleted_at
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    row_to_category_at(row, 0)
}

/// Convert a SQLite row to a Product with its category resolved.
///
/// Expected columns: id, name, price, category_id, created_at, updated_at,
/// deleted_at, followed by the five nullable category columns of a LEFT JOIN.
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let price: f64 = row.get(2)?;
    let category_id: i64 = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;
    let deleted_at: Option<String> = row.get(6)?;

    let joined_id: Option<i64> = row.get(PRODUCT_CATEGORY_OFFSET)?;
    let category = match joined_id {
        Some(_) => Some(row_to_category_at(row, PRODUCT_CATEGORY_OFFSET)?),
        None => None,
    };

    Ok(Product {
        id: id as u64,
        name,
        price,
        category_id: category_id as u64,
        category,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
        deleted_at: parse_optional_datetime(deleted_at)?,
    })
}

fn row_to_category_at(row: &Row, offset: usize) -> rusqlite::Result<Category> {
    let id: i64 = row.get(offset)?;
    let name: String = row.get(offset + 1)?;
    let created_at: String = row.get(offset + 2)?;
    let updated_at: String = row.get(offset + 3)?;
    let deleted_at: Option<String> = row.get(offset + 4)?;

    Ok(Category {
        id: id as u64,
        name,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
        deleted_at: parse_optional_datetime(deleted_at)?,
    })
}

/// Convert a domain ID to SQLite's signed integer key.
pub fn id_to_sql(id: u64) -> i64 {
    i64::try_from(id).unwrap_or(-1)
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn parse_optional_datetime(s: Option<String>) -> rusqlite::Result<Option<DateTime<Utc>>> {
    s.as_deref().map(parse_datetime).transpose()
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
