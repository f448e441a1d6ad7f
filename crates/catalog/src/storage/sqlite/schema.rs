//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Rows are soft-deleted through `deleted_at`; every read
//! filters on `deleted_at IS NULL`.

/// SQL statement run once per connection: enables foreign keys and creates tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Categories table
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);

-- Products table
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    category_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT,
    FOREIGN KEY (category_id) REFERENCES categories(id)
);

CREATE INDEX IF NOT EXISTS idx_categories_deleted_at ON categories(deleted_at);
CREATE INDEX IF NOT EXISTS idx_products_deleted_at ON products(deleted_at);
CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id);
"#;

// Category queries
pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (name, created_at, updated_at)
VALUES (?1, ?2, ?2)
"#;

pub const SELECT_CATEGORY_BY_ID: &str = r#"
SELECT id, name, created_at, updated_at, deleted_at
FROM categories
WHERE id = ?1 AND deleted_at IS NULL
"#;

pub const SELECT_CATEGORIES: &str = r#"
SELECT id, name, created_at, updated_at, deleted_at
FROM categories
WHERE deleted_at IS NULL
ORDER BY id ASC
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?2, updated_at = ?3
WHERE id = ?1 AND deleted_at IS NULL
"#;

pub const SOFT_DELETE_CATEGORY: &str = r#"
UPDATE categories
SET deleted_at = ?2
WHERE id = ?1 AND deleted_at IS NULL
"#;

// Product queries
pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (name, price, category_id, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?4)
"#;

/// Product columns followed by the live category's columns (NULL when the
/// category is missing or soft-deleted).
pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT p.id, p.name, p.price, p.category_id, p.created_at, p.updated_at, p.deleted_at,
       c.id, c.name, c.created_at, c.updated_at, c.deleted_at
FROM products p
LEFT JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL
WHERE p.id = ?1 AND p.deleted_at IS NULL
"#;

pub const SELECT_PRODUCTS: &str = r#"
SELECT p.id, p.name, p.price, p.category_id, p.created_at, p.updated_at, p.deleted_at,
       c.id, c.name, c.created_at, c.updated_at, c.deleted_at
FROM products p
LEFT JOIN categories c ON c.id = p.category_id AND c.deleted_at IS NULL
WHERE p.deleted_at IS NULL
ORDER BY p.id ASC
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, price = ?3, category_id = ?4, updated_at = ?5
WHERE id = ?1 AND deleted_at IS NULL
"#;

pub const SOFT_DELETE_PRODUCT: &str = r#"
UPDATE products
SET deleted_at = ?2
WHERE id = ?1 AND deleted_at IS NULL
"#;
