//! Checkout Flow Module
//!
//! Consumes the cart store's snapshot and totals, validates the order
//! form, and performs a simulated submission. On success the cart is
//! cleared; on failure or timeout it is preserved so the user can retry.

pub mod flow;
pub mod models;

// Re-export commonly used types for convenience
pub use flow::CheckoutFlow;
pub use models::{CheckoutError, OrderForm, OrderTotals, Receipt};
