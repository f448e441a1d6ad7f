mod error;
mod keys;
mod lookup;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{category_key, product_key, CATEGORY_KEY_PREFIX, PRODUCT_KEY_PREFIX};
pub use lookup::CacheLookup;
pub use serialization::{
    deserialize_category, deserialize_product, serialize_category, serialize_product,
    SerializationError,
};
pub use traits::Cache;
