use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in the service's bearer token.
///
/// The claims are always a pure projection of the raw token: they are
/// produced by [`TokenDecoder::decode`](super::TokenDecoder::decode) and
/// never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - the user id the service assigned at registration.
    #[serde(alias = "sub")]
    pub id: String,
    /// Email the account was registered with.
    pub email: String,
    /// Whether the service flagged this account as an administrator.
    ///
    /// Advisory only: it selects the admin dashboard in the UI, but every
    /// privileged operation is re-checked server-side.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Expiration time (Unix timestamp). Not all tokens carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at time (Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl SessionClaims {
    /// Returns true if the token carries an expiry that has passed.
    ///
    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }
}
