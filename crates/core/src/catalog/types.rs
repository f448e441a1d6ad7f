use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product category.
///
/// `id` is assigned by the relational store on insert; a value of `0` means
/// the category has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete tombstone. `None` means the category is live.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a new, not yet persisted category.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Sets a specific ID for this category (useful for updates and testing).
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the created_at timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the updated_at timestamp (useful for testing).
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns true if the category carries a soft-delete tombstone.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A product that belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category_id: u64,
    /// Snapshot of the referenced category, resolved by the store on read.
    /// Never authoritative: writes only look at `category_id`.
    #[serde(default)]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a new, not yet persisted product.
    pub fn new(name: impl Into<String>, price: f64, category_id: u64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            price,
            category_id,
            category: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Sets a specific ID for this product (useful for updates and testing).
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Attaches a category snapshot.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the created_at timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the updated_at timestamp (useful for testing).
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns true if the product carries a soft-delete tombstone.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
