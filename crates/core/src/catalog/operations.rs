use super::error::{CategoryError, ProductError};

/// Maximum length of category and product names, matching the column size.
pub const MAX_NAME_LEN: usize = 100;

/// Validates a category name before creation or update.
pub fn validate_category_name(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CategoryError::NameTooLong);
    }
    Ok(())
}

/// Validates product fields before creation or update.
///
/// # Examples
///
/// ```
/// use catalog_core::catalog::{validate_product, ProductError};
///
/// assert!(validate_product("Hammer", 9.99).is_ok());
/// assert!(validate_product("Free sample", 0.0).is_ok());
/// assert_eq!(validate_product("", 9.99), Err(ProductError::EmptyName));
/// assert_eq!(validate_product("Hammer", -1.0), Err(ProductError::NegativePrice(-1.0)));
/// ```
pub fn validate_product(name: &str, price: f64) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ProductError::NameTooLong);
    }
    if !price.is_finite() {
        return Err(ProductError::InvalidPrice);
    }
    if price < 0.0 {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}
