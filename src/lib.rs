//! Marquee: a client SDK for a remote movie-catalog service.
//!
//! The crate covers the client side of the service only: decoding and
//! persisting the bearer token the service issues, selecting the view a
//! session is entitled to, and issuing catalog requests with the token
//! attached. The server stays the authority for validation, authorization
//! and storage; everything here is advisory wiring around its REST API.

pub mod actions;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod routing;
pub mod secret;
pub mod session;
pub mod token;
pub mod validators;

pub use api::{AccountGateway, CatalogGateway, HttpGateway, Movie, MovieDraft, NewComment};
pub use config::ClientConfig;
pub use routing::{DashboardKind, Route, ViewTarget};
pub use secret::SecretString;
pub use session::{FileTokenStorage, InMemoryTokenStorage, Session, SessionStore, TokenStorage};
pub use token::{SessionClaims, TokenDecoder};
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use api::MockGateway;

use std::fmt;

/// Errors surfaced by the client.
///
/// Nothing here is fatal: every failure is reported to the caller, which
/// stays interactive and may simply retry the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    Transport(String),
    /// The service answered with a non-success status. `message` is the
    /// server's own message when the body carried one, otherwise the
    /// status line.
    Api { status: u16, message: String },
    /// The bearer token could not be decoded into claims.
    TokenInvalid,
    /// The bearer token carries an expiry in the past.
    TokenExpired,
    /// The operation requires a session and none is present.
    Unauthenticated,
    /// The service answered with a body shape the client does not know.
    UnexpectedResponse(String),
    /// Client-side advisory validation rejected the input.
    Validation(ValidationError),
    /// Reading or writing the persisted token failed.
    Storage(String),
    ConfigurationError(String),
}

impl std::error::Error for ClientError {}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ClientError::Api { status, message } => write!(f, "Service error ({status}): {message}"),
            ClientError::TokenInvalid => write!(f, "Invalid token"),
            ClientError::TokenExpired => write!(f, "Token has expired"),
            ClientError::Unauthenticated => write!(f, "Not authenticated. Please log in."),
            ClientError::UnexpectedResponse(msg) => write!(f, "Unexpected response shape: {msg}"),
            ClientError::Validation(err) => write!(f, "{err}"),
            ClientError::Storage(msg) => write!(f, "Token storage error: {msg}"),
            ClientError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}
