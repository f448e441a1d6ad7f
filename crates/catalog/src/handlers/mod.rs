pub mod categories;
pub mod error;
pub mod health;
pub mod products;

pub use error::AppError;
