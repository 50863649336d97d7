//! Advisory client-side validation.
//!
//! Everything here runs before a request is issued, so obviously bad
//! input never reaches the wire. The service performs its own
//! authoritative validation; a pass here guarantees nothing.

pub mod email;
pub mod movie;
pub mod password;

pub use email::validate_email;
pub use movie::{validate_comment, validate_director, validate_title};
pub use password::{validate_password, validate_password_confirmation};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    EmailEmpty,
    EmailTooLong,
    EmailInvalidFormat,
    PasswordEmpty,
    PasswordMismatch,
    TitleEmpty,
    DirectorEmpty,
    CommentEmpty,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailEmpty => write!(f, "Email cannot be empty"),
            Self::EmailTooLong => write!(f, "Email is too long (max 254 characters)"),
            Self::EmailInvalidFormat => write!(f, "Invalid email format"),
            Self::PasswordEmpty => write!(f, "Password cannot be empty"),
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
            Self::TitleEmpty => write!(f, "Please provide a title for the movie"),
            Self::DirectorEmpty => write!(f, "Please provide a director for the movie"),
            Self::CommentEmpty => write!(f, "Please write a comment"),
        }
    }
}

impl std::error::Error for ValidationError {}
