//! Session state: the client's view of who is logged in.
//!
//! A [`Session`] pairs the raw bearer token with the claims decoded from
//! it. The [`SessionStore`] owns the current session, persists the raw
//! token across restarts, and lets dependents observe every change.

mod file_store;
mod memory_store;
mod repository;
mod store;

pub use file_store::FileTokenStorage;
pub use memory_store::InMemoryTokenStorage;
pub use repository::TokenStorage;
pub use store::SessionStore;

use crate::secret::SecretString;
use crate::token::SessionClaims;

/// The currently authenticated user.
///
/// `claims` is always the decoded form of `raw_token`; the two never
/// diverge. A token that fails to decode produces no `Session` at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub raw_token: SecretString,
    pub claims: SessionClaims,
}

impl Session {
    pub fn new(raw_token: SecretString, claims: SessionClaims) -> Self {
        Self { raw_token, claims }
    }

    /// Email of the logged-in user.
    pub fn email(&self) -> &str {
        &self.claims.email
    }

    /// Whether the service flagged this user as an administrator.
    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(is_admin: bool) -> SessionClaims {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "email": "test@example.com",
            "isAdmin": is_admin,
        }))
        .unwrap()
    }

    #[test]
    fn test_session_accessors() {
        let session = Session::new(SecretString::new("raw"), claims(true));
        assert_eq!(session.email(), "test@example.com");
        assert!(session.is_admin());
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::new(SecretString::new("raw-token"), claims(false));
        let debug = format!("{session:?}");
        assert!(!debug.contains("raw-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
