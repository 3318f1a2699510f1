//! Authentication Domain Models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// A signed-in user, as exposed to the rest of the application.
///
/// Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque account identifier
    pub id: String,

    /// Account email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,
}

/// User-visible authentication failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailTaken,
}
