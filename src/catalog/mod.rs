//! Product Catalog Module
//!
//! This module owns the read-only product data, including:
//! - Domain models (Product)
//! - The seeded demo catalog
//! - Lookup and query/filter/sort operations

mod data;
pub mod models;
pub mod query;
pub mod state;

// Re-export commonly used types for convenience
pub use models::Product;
pub use query::{ProductQuery, SortBy};
pub use state::Catalog;
