//! Auth Session
//!
//! Holds the optional logged-in user identity. Login is simulated: no
//! credentials are verified, and the order count is a mock value that only
//! exists for the profile screen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged-in user. At most one exists per session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id, freshly generated at login
    pub id: Uuid,
    /// Email as typed (not validated)
    pub email: String,
    /// Display name as typed
    pub name: String,
    /// Mock lifetime order count, display-only
    pub orders: u32,
}

/// The session's authentication state
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// Create a logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in with the typed credentials, replacing any current user.
    ///
    /// Email and name are accepted as-is; even empty strings pass, matching
    /// the permissive behavior of the login flow.
    pub fn login(&mut self, email: impl Into<String>, name: impl Into<String>) -> &User {
        let user = User {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            orders: rand::random::<u32>() % 10,
        };
        tracing::info!(user = %user.id, "user logged in");
        self.user.insert(user)
    }

    /// Clear the current user. No-op when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.id, "user logged out");
        }
    }

    /// The current user, if any
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_creates_user() {
        let mut auth = AuthSession::new();
        assert!(!auth.is_logged_in());

        auth.login("a@b.com", "Jane");
        let user = auth.user().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "Jane");
        assert!(user.orders < 10);
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let mut auth = AuthSession::new();
        let first_id = auth.login("first@shop.test", "First").id;
        let second_id = auth.login("second@shop.test", "Second").id;

        assert_ne!(first_id, second_id);
        assert_eq!(auth.user().unwrap().email, "second@shop.test");
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut auth = AuthSession::new();
        auth.login("a@b.com", "Jane");
        auth.logout();
        assert!(!auth.is_logged_in());
        auth.logout();
        assert!(!auth.is_logged_in());
    }
}
