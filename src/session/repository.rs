//! Token storage trait.

use async_trait::async_trait;

use crate::secret::SecretString;
use crate::ClientError;

/// Storage for the single persisted bearer token.
///
/// The client persists exactly one value: the raw token issued at login,
/// under a fixed key. Implementations provide different backends:
/// - [`InMemoryTokenStorage`](super::InMemoryTokenStorage): process-local,
///   for tests and throwaway sessions
/// - [`FileTokenStorage`](super::FileTokenStorage): survives restarts
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Returns the persisted token, if one is present.
    async fn load(&self) -> Result<Option<SecretString>, ClientError>;

    /// Persists a token, replacing any previous one.
    async fn save(&self, token: &SecretString) -> Result<(), ClientError>;

    /// Removes the persisted token. Succeeds when none is present.
    async fn clear(&self) -> Result<(), ClientError>;
}
