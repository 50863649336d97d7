//! The HTTP client for the catalog service.
//!
//! [`HttpGateway`] owns the outbound requests: it joins paths onto the
//! configured base URL, attaches the session's bearer token when one is
//! present, and turns non-success responses into
//! [`ClientError::Api`](crate::ClientError::Api) with the server's own
//! message when the body carries one. It does not retry, refresh tokens,
//! or queue requests: a call made without a valid session simply gets
//! whatever the server returns.
//!
//! The [`AccountGateway`] and [`CatalogGateway`] traits are the seam the
//! actions and dashboards are written against; [`MockGateway`] implements
//! both in memory for tests.

mod gateway;
mod http;
#[cfg(any(test, feature = "mocks"))]
mod mock;
mod types;

pub use gateway::{AccountGateway, CatalogGateway};
pub use http::HttpGateway;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockGateway;
pub use types::{LoginRequest, Movie, MovieDraft, MoviesPayload, NewComment, RegisterRequest};
