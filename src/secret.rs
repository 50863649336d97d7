//! Sensitive data wrapper types.
//!
//! Bearer tokens and passwords travel through most of the client; this
//! module keeps them out of logs and debug output.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string that refuses to print itself.
///
/// `Debug` and `Display` both render `[REDACTED]`, so a token or
/// password inside a logged struct never reaches the log output.
///
/// # Example
///
/// ```rust
/// use marquee::SecretString;
///
/// let token = SecretString::new("eyJhbGciOi...");
/// assert_eq!(format!("{:?}", token), "SecretString([REDACTED])");
/// assert_eq!(token.expose_secret(), "eyJhbGciOi...");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the wrapped value.
    ///
    /// Call this only at the point the value actually leaves the
    /// process, such as when building an `Authorization` header.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns true if the wrapped value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // the login request body and the persisted token need the real value
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_string_debug_redacted() {
        let secret = SecretString::new("raw-token");
        assert_eq!(format!("{secret:?}"), "SecretString([REDACTED])");
    }

    #[test]
    fn test_secret_string_display_redacted() {
        let secret = SecretString::new("raw-token");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn test_secret_string_expose_secret() {
        let secret = SecretString::new("raw-token");
        assert_eq!(secret.expose_secret(), "raw-token");
    }

    #[test]
    fn test_secret_string_is_empty() {
        assert!(SecretString::new("").is_empty());
        assert!(!SecretString::new("x").is_empty());
    }

    #[test]
    fn test_secret_string_serialize_exposes_value() {
        let secret = SecretString::new("my_token");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"my_token\"");
    }

    #[test]
    fn test_secret_string_roundtrip() {
        let original = SecretString::new("secret_value");
        let json = serde_json::to_string(&original).unwrap();
        let restored: SecretString = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
