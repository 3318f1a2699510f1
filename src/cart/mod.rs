//! Shopping Cart Domain Module
//!
//! This module contains all cart business logic, including:
//! - Domain models (CartLine, CartSnapshot, persisted layout)
//! - The cart store (mutators, derived totals, subscriptions)
//! - Formatting helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartLine, CartSnapshot};
pub use state::{CartStore, SharedCartStore};
