//! Bearer token decoding.
//!
//! The service issues an opaque bearer token at login; this module turns
//! it into a [`SessionClaims`] the rest of the client can read. The
//! client never holds the signing secret, so the decode is structural
//! only: the payload is parsed and the expiry checked, but the signature
//! is not verified. The server verifies every authenticated request
//! itself; nothing security-relevant hangs off this decode.
//!
//! # Example
//!
//! ```ignore
//! use marquee::TokenDecoder;
//!
//! let decoder = TokenDecoder::new();
//! let claims = decoder.decode(raw_token)?;
//! println!("logged in as {}", claims.email);
//! ```

mod claims;
mod decoder;

pub use claims::SessionClaims;
pub use decoder::TokenDecoder;
