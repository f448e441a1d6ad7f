//! Relational store adapters.
//!
//! Concrete implementations of the repository traits defined in
//! `catalog_core::storage`. SQLite is the only backend; the connection runs on
//! `tokio-rusqlite`'s dedicated thread so statements never block the runtime.

pub mod sqlite;

pub use sqlite::SqliteRepository;
