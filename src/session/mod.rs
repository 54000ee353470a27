//! Session store - the single authenticated identity, persisted under `user`
//!
//! Authentication here is a comparison against one fixed credential pair. It
//! exists to gate the admin surface in the UI and is not a security boundary;
//! a real deployment needs a genuine identity provider.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::notify::{Notice, Notifier};
use crate::storage::{self, Storage};

/// Storage key of the persisted session
pub const USER_KEY: &str = "user";

/// Fixed test credentials. Not a secret and not a security design.
pub mod fixture {
    pub const ADMIN_ID: &str = "1";
    pub const ADMIN_USERNAME: &str = "admin";
    pub const ADMIN_PASSWORD: &str = "password123";
}

/// The authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

impl User {
    fn admin() -> Self {
        Self {
            id: fixture::ADMIN_ID.to_string(),
            username: fixture::ADMIN_USERNAME.to_string(),
            is_admin: true,
        }
    }
}

/// Holds and persists the current session
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    notifier: Notifier,
    login_delay: Duration,
    user: Option<User>,
}

impl SessionStore {
    /// Create a logged-out store; call [`SessionStore::restore`] to pick up a saved session
    pub fn new(storage: Arc<dyn Storage>, notifier: Notifier, login_delay: Duration) -> Self {
        Self {
            storage,
            notifier,
            login_delay,
            user: None,
        }
    }

    /// Restore a persisted session, discarding it if it cannot be read
    pub fn restore(&mut self) -> Option<&User> {
        match storage::load_versioned::<User>(self.storage.as_ref(), USER_KEY) {
            Ok(Some(user)) => {
                tracing::debug!("Restored session for {}", user.username);
                self.user = Some(user);
            }
            Ok(None) => {
                self.user = None;
            }
            Err(e) => {
                tracing::warn!("Discarding stored session: {}", e);
                if let Err(e) = self.storage.remove(USER_KEY) {
                    tracing::warn!("Failed to remove stored session: {}", e);
                }
                self.user = None;
            }
        }
        self.user.as_ref()
    }

    /// Check credentials after the artificial login delay
    ///
    /// Returns `true` and persists the session only when both fields match.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        if username != fixture::ADMIN_USERNAME || password != fixture::ADMIN_PASSWORD {
            tracing::info!("Rejected login attempt");
            self.notifier.publish(Notice::LoginFailed);
            return false;
        }

        let user = User::admin();
        if let Err(e) = storage::save_versioned(self.storage.as_ref(), USER_KEY, &user) {
            tracing::error!("Login error: {}", e);
            self.notifier.publish(Notice::LoginError);
            return false;
        }

        tracing::info!("Logged in as {}", user.username);
        self.notifier.publish(Notice::LoggedIn {
            username: user.username.clone(),
        });
        self.user = Some(user);
        true
    }

    /// Clear the session in memory and storage; fine when already logged out
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.username);
        }
        if let Err(e) = self.storage.remove(USER_KEY) {
            tracing::warn!("Failed to remove stored session: {}", e);
        }
        self.notifier.publish(Notice::LoggedOut);
    }

    /// The current identity, if any
    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The current identity, if it may use the admin surface
    pub fn require_admin(&self) -> Result<&User> {
        match &self.user {
            Some(user) if user.is_admin => Ok(user),
            Some(user) => Err(Error::NotAdmin(user.username.clone())),
            None => Err(Error::NotAuthenticated),
        }
    }
}
