//! Functional core for the catalog service.
//!
//! Pure data types and functions shared by the service shell:
//!
//! - [`catalog`]: the `Category` and `Product` entities, request payloads and validation
//! - [`cache`]: the cache store trait, cache keys, payload serialization and lookup outcomes
//! - [`storage`]: repository traits, the repository error taxonomy and its HTTP mapping
//!
//! Nothing in this crate performs I/O.

pub mod cache;
pub mod catalog;
pub mod storage;
