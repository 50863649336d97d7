//! In-memory token storage.
//!
//! Suitable for tests and sessions that should not outlive the process.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::repository::TokenStorage;
use crate::secret::SecretString;
use crate::ClientError;

/// In-memory token storage.
///
/// The token is lost when the process exits. For persistence across
/// restarts, use [`FileTokenStorage`](super::FileTokenStorage).
#[derive(Clone, Default)]
pub struct InMemoryTokenStorage {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl InMemoryTokenStorage {
    /// Creates an empty in-memory token storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with a token, as if a previous run
    /// had persisted it.
    pub fn with_token(token: impl Into<SecretString>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn load(&self) -> Result<Option<SecretString>, ClientError> {
        let guard = self
            .token
            .read()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?;

        Ok(guard.clone())
    }

    async fn save(&self, token: &SecretString) -> Result<(), ClientError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?;

        *guard = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?;

        *guard = None;
        Ok(())
    }
}
