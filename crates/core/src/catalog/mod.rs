mod error;
mod operations;
mod requests;
mod types;

pub use error::{CategoryError, ProductError};
pub use operations::{validate_category_name, validate_product, MAX_NAME_LEN};
pub use requests::{
    CreateCategoryRequest, CreateProductRequest, UpdateCategoryRequest, UpdateProductRequest,
};
pub use types::{Category, Product};
