//! Storefront Core Library
//!
//! This library provides the application core for a storefront demo:
//! product catalog, shopping cart state, checkout flow, and a mocked
//! authentication provider. There is no network surface; "server"
//! interactions (login, order submission) are simulated local delays.

// Domain modules
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;

// Infrastructure
pub mod storage;
