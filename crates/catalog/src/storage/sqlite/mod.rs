//! SQLite storage backend.
//!
//! Implements `CategoryRepository` and `ProductRepository` on a single
//! connection, using `rusqlite` for statements and `tokio-rusqlite` for async
//! wrapping. Every write runs in its own transaction.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
