/// Entity tag used in category cache keys.
pub const CATEGORY_KEY_PREFIX: &str = "category";

/// Entity tag used in product cache keys.
pub const PRODUCT_KEY_PREFIX: &str = "product";

/// Returns the cache key for a single category.
///
/// ```
/// use catalog_core::cache::category_key;
///
/// assert_eq!(category_key(1), "category:1");
/// ```
pub fn category_key(category_id: u64) -> String {
    format!("{}:{}", CATEGORY_KEY_PREFIX, category_id)
}

/// Returns the cache key for a single product.
pub fn product_key(product_id: u64) -> String {
    format!("{}:{}", PRODUCT_KEY_PREFIX, product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key() {
        assert_eq!(category_key(1), "category:1");
        assert_eq!(category_key(u64::MAX), "category:18446744073709551615");
    }

    #[test]
    fn test_product_key() {
        assert_eq!(product_key(42), "product:42");
    }

    #[test]
    fn test_keys_do_not_collide_across_entities() {
        assert_ne!(category_key(1), product_key(1));
    }
}
