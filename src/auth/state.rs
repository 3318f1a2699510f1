//! Authentication Store
//!
//! Holds the credential table and the currently signed-in user.
//! Credentials live in a concurrent map keyed by lowercased email;
//! passwords are plain text because the store is a demo mock.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use dashmap::DashMap;
use uuid::Uuid;

use super::models::{AuthError, Role, User};

/// Latency applied to login and registration to mimic a round trip.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// A stored account: the public user plus its password.
struct UserRecord {
    user: User,
    password: String,
}

/// The mocked authentication provider.
pub struct AuthStore {
    /// Accounts keyed by lowercased email
    users: DashMap<String, UserRecord>,

    /// The signed-in user, if any
    current: RwLock<Option<User>>,

    /// Simulated server latency for login/register
    latency: Duration,
}

impl AuthStore {
    /// Creates an empty store with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            users: DashMap::new(),
            current: RwLock::new(None),
            latency,
        }
    }

    /// Creates a store seeded with the two demo accounts
    /// (`user@example.com` / `admin@example.com`).
    pub fn with_demo_users(latency: Duration) -> Self {
        let store = Self::new(latency);
        store.insert_account(
            User {
                id: "1".into(),
                email: "user@example.com".into(),
                name: "Demo User".into(),
                role: Role::User,
            },
            "password123",
        );
        store.insert_account(
            User {
                id: "2".into(),
                email: "admin@example.com".into(),
                name: "Admin User".into(),
                role: Role::Admin,
            },
            "admin123",
        );
        store
    }

    /// Signs in with an email (matched case-insensitively) and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        let key = email.to_lowercase();
        let record = self.users.get(&key).ok_or(AuthError::InvalidCredentials)?;
        if record.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = record.user.clone();
        drop(record);
        self.set_current(Some(user.clone()));

        tracing::info!(email = %user.email, "login successful");
        Ok(user)
    }

    /// Registers a new account and signs it in. The email must not be
    /// taken (matched case-insensitively).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        let key = email.to_lowercase();
        if self.users.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().simple().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::User,
        };
        self.users.insert(
            key,
            UserRecord {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        self.set_current(Some(user.clone()));

        tracing::info!(email = %user.email, "registration successful");
        Ok(user)
    }

    /// Signs out the current user. Infallible and idempotent.
    pub fn logout(&self) {
        self.set_current(None);
        tracing::info!("logged out");
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn insert_account(&self, user: User, password: &str) {
        self.users.insert(
            user.email.to_lowercase(),
            UserRecord {
                user,
                password: password.to_string(),
            },
        );
    }

    fn set_current(&self, user: Option<User>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = user;
    }
}
