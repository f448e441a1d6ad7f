//! Pure functions for serializing/deserializing catalog entities to/from cache bytes.
//!
//! Cache payloads are the field-for-field JSON encoding of the stored row, which
//! keeps cached values human-readable and easy to inspect with `redis-cli`.

use crate::catalog::{Category, Product};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a category to JSON bytes.
pub fn serialize_category(category: &Category) -> Result<Vec<u8>> {
    serde_json::to_vec(category).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a category.
pub fn deserialize_category(bytes: &[u8]) -> Result<Category> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a product, including its category snapshot, to JSON bytes.
///
/// # Errors
///
/// Fails when the price is not a finite number, since JSON cannot encode it.
pub fn serialize_product(product: &Product) -> Result<Vec<u8>> {
    if !product.price.is_finite() {
        return Err(SerializationError::SerializeFailed(format!(
            "non-finite price {} for product {}",
            product.price, product.id
        )));
    }
    serde_json::to_vec(product).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a product.
pub fn deserialize_product(bytes: &[u8]) -> Result<Product> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
