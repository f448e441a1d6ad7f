//! API request types for catalog operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.
//! Updates carry the full mutable row: the store saves every column it is given.

use serde::{Deserialize, Serialize};

use super::error::{CategoryError, ProductError};
use super::operations::{validate_category_name, validate_product};
use super::types::{Category, Product};

/// Request payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    /// Create a new request.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validate the payload.
    pub fn validate(&self) -> Result<(), CategoryError> {
        validate_category_name(&self.name)
    }

    /// Convert into an unpersisted category.
    pub fn into_category(self) -> Category {
        Category::new(self.name)
    }
}

/// Request payload for replacing a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

impl UpdateCategoryRequest {
    /// Validate the payload.
    pub fn validate(&self) -> Result<(), CategoryError> {
        validate_category_name(&self.name)
    }

    /// Convert into the category row to save under `id`.
    pub fn into_category(self, id: u64) -> Category {
        Category::new(self.name).with_id(id)
    }
}

/// Request payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: u64,
}

impl CreateProductRequest {
    /// Create a new request.
    pub fn new(name: impl Into<String>, price: f64, category_id: u64) -> Self {
        Self {
            name: name.into(),
            price,
            category_id,
        }
    }

    /// Validate the payload.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_product(&self.name, self.price)
    }

    /// Convert into an unpersisted product.
    pub fn into_product(self) -> Product {
        Product::new(self.name, self.price, self.category_id)
    }
}

/// Request payload for replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: u64,
}

impl UpdateProductRequest {
    /// Validate the payload.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_product(&self.name, self.price)
    }

    /// Convert into the product row to save under `id`.
    pub fn into_product(self, id: u64) -> Product {
        Product::new(self.name, self.price, self.category_id).with_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_request_into_category() {
        let category = CreateCategoryRequest::new("Tools").into_category();

        assert_eq!(category.id, 0);
        assert_eq!(category.name, "Tools");
    }

    #[test]
    fn test_update_category_request_uses_path_id() {
        let request = UpdateCategoryRequest {
            name: "Garden".to_string(),
        };

        let category = request.into_category(42);

        assert_eq!(category.id, 42);
        assert_eq!(category.name, "Garden");
    }

    #[test]
    fn test_create_product_request_validation() {
        assert!(CreateProductRequest::new("Hammer", 9.99, 1)
            .validate()
            .is_ok());
        assert_eq!(
            CreateProductRequest::new("", -1.0, 1).validate(),
            Err(ProductError::EmptyName)
        );
    }

    #[test]
    fn test_update_product_request_into_product() {
        let request: UpdateProductRequest =
            serde_json::from_str(r#"{"name":"Hammer","price":14.99,"category_id":1}"#).unwrap();

        let product = request.into_product(1);

        assert_eq!(product.id, 1);
        assert_eq!(product.price, 14.99);
        assert_eq!(product.category_id, 1);
        assert!(product.category.is_none());
    }
}
