//! Mocked Authentication Module
//!
//! A stand-in authentication provider backed by a static credential
//! table. Login and registration simulate server latency but never
//! leave the process. Authentication is independent of the cart store.

pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{AuthError, Role, User};
pub use state::AuthStore;
