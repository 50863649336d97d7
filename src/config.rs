//! Configuration for the catalog client.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use marquee::ClientConfig;
//!
//! // Use the hosted service
//! let config = ClientConfig::default();
//!
//! // Or point at a local instance with a tighter timeout
//! let config = ClientConfig::new("http://127.0.0.1:4000")
//!     .unwrap()
//!     .with_request_timeout(Duration::from_secs(5));
//! ```

use std::fmt;
use std::time::Duration;

use crate::ClientError;

/// Base URL of the hosted catalog service.
pub const DEFAULT_BASE_URL: &str = "https://movieapp-api-lms1.onrender.com";

/// Default per-request timeout.
///
/// The hosted service cold-starts, so the default is generous.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpGateway`](crate::HttpGateway).
///
/// There is no retry, backoff, or token-refresh knob: the client issues
/// each request exactly once and reports whatever comes back.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) request_timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for a service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ConfigurationError` if `base_url` is empty or
    /// not an http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();

        if base_url.is_empty() {
            return Err(ClientError::ConfigurationError(
                "base URL must not be empty".to_owned(),
            ));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::ConfigurationError(format!(
                "base URL must be http(s), got {base_url}"
            )));
        }

        Ok(Self {
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Creates a configuration suitable for development against a local
    /// service instance.
    pub fn development() -> Self {
        Self {
            base_url: "http://127.0.0.1:4000".to_owned(),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
