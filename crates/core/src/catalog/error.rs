use thiserror::Error;

/// Errors raised when validating caller-supplied category data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long (max 100 characters)")]
    NameTooLong,
}

/// Errors raised when validating caller-supplied product data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Product name too long (max 100 characters)")]
    NameTooLong,
    #[error("Product price must be non-negative, got {0}")]
    NegativePrice(f64),
    #[error("Product price must be a finite number")]
    InvalidPrice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_error_display() {
        assert_eq!(
            CategoryError::EmptyName.to_string(),
            "Category name cannot be empty"
        );
        assert_eq!(
            CategoryError::NameTooLong.to_string(),
            "Category name too long (max 100 characters)"
        );
    }

    #[test]
    fn test_product_error_display() {
        assert_eq!(
            ProductError::EmptyName.to_string(),
            "Product name cannot be empty"
        );
        assert_eq!(
            ProductError::NegativePrice(-1.0).to_string(),
            "Product price must be non-negative, got -1"
        );
    }
}
