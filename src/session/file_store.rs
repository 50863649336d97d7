//! File-based token storage.
//!
//! Persists the raw token as a single file in the configured directory,
//! the client-side equivalent of the browser's fixed local-storage key.

use std::path::PathBuf;

use async_trait::async_trait;

use super::repository::TokenStorage;
use crate::secret::SecretString;
use crate::ClientError;

/// Fixed file name the token is stored under.
pub const TOKEN_FILE: &str = "user_token";

/// File-based token storage.
///
/// # Example
///
/// ```rust,ignore
/// use marquee::FileTokenStorage;
///
/// let storage = FileTokenStorage::new("/home/me/.marquee")?;
/// ```
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a file token storage rooted at `directory`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ClientError::Storage(format!("Failed to create token directory: {e}")))?;

        Ok(Self {
            path: dir.join(TOKEN_FILE),
        })
    }

    /// Returns the path of the token file.
    pub fn token_path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<SecretString>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Storage(format!("Failed to read token file: {e}")))?;

        let token = content.trim();
        if token.is_empty() {
            return Ok(None);
        }

        Ok(Some(SecretString::new(token)))
    }

    async fn save(&self, token: &SecretString) -> Result<(), ClientError> {
        std::fs::write(&self.path, token.expose_secret())
            .map_err(|e| ClientError::Storage(format!("Failed to write token file: {e}")))
    }

    async fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| ClientError::Storage(format!("Failed to delete token file: {e}")))?;
        }

        Ok(())
    }
}
