//! The session store: owner of the current [`Session`].
//!
//! One store exists per application and is passed explicitly to the
//! gateway, actions, and dashboards that need it; there is no ambient
//! global to look up. Dependents that must re-evaluate on every session
//! change subscribe through a watch channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use super::repository::TokenStorage;
use super::Session;
use crate::events::{dispatch, SessionEvent};
use crate::secret::SecretString;
use crate::token::TokenDecoder;
use crate::ClientError;

struct Inner {
    storage: Arc<dyn TokenStorage>,
    decoder: TokenDecoder,
    current: watch::Sender<Option<Session>>,
    initialized: AtomicBool,
}

/// Holds the current session and persists its raw token.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Creates a store with no active session.
    ///
    /// Call [`initialize`](Self::initialize) once at startup to restore a
    /// persisted session.
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        let (current, _) = watch::channel(None);

        Self {
            inner: Arc::new(Inner {
                storage: Arc::new(storage),
                decoder: TokenDecoder::new(),
                current,
                initialized: AtomicBool::new(false),
            }),
        }
    }

    /// Restores the session from persisted storage.
    ///
    /// Runs once per application lifetime, at startup. A persisted token
    /// that fails to decode is removed from storage and the store stays
    /// logged out; the failure is logged but not surfaced, since a stale
    /// token and no token mean the same thing to the caller. A second
    /// call logs a warning and returns the current session unchanged.
    pub async fn initialize(&self) -> Option<Session> {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            log::warn!(
                target: "marquee::session",
                "initialize called more than once, ignoring"
            );
            return self.current();
        }

        let token = match self.inner.storage.load().await {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(err) => {
                log::warn!(
                    target: "marquee::session",
                    "msg=\"failed to read persisted token\" error=\"{err}\""
                );
                return None;
            }
        };

        match self.inner.decoder.decode(token.expose_secret()) {
            Ok(claims) => {
                let session = Session::new(token, claims);
                self.inner.current.send_replace(Some(session.clone()));

                dispatch(SessionEvent::SessionRestored {
                    email: session.email().to_owned(),
                    at: Utc::now(),
                })
                .await;

                Some(session)
            }
            Err(err) => {
                log::warn!(
                    target: "marquee::session",
                    "msg=\"persisted token rejected, clearing\" error=\"{err}\""
                );

                if let Err(clear_err) = self.inner.storage.clear().await {
                    log::warn!(
                        target: "marquee::session",
                        "msg=\"failed to clear stale token\" error=\"{clear_err}\""
                    );
                }

                dispatch(SessionEvent::SessionRestoreFailed {
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;

                None
            }
        }
    }

    /// Replaces the current session with one decoded from `raw_token`.
    ///
    /// The token is supplied by the caller, which has already completed
    /// the authentication request; no network I/O happens here. The token
    /// is decoded first and persisted only on success, so a bad token can
    /// neither be stored nor produce a partially-populated session.
    ///
    /// # Errors
    ///
    /// - `ClientError::TokenInvalid` / `ClientError::TokenExpired` - the
    ///   token did not decode; the previous session is untouched
    /// - `ClientError::Storage(_)` - the token decoded but could not be
    ///   persisted; the previous session is untouched
    pub async fn login(&self, raw_token: SecretString) -> Result<Session, ClientError> {
        let claims = self.inner.decoder.decode(raw_token.expose_secret())?;

        self.inner.storage.save(&raw_token).await?;

        let session = Session::new(raw_token, claims);
        self.inner.current.send_replace(Some(session.clone()));

        Ok(session)
    }

    /// Clears the session and the persisted token.
    ///
    /// Unconditionally succeeds: the in-memory session is always cleared,
    /// and a storage failure is logged rather than surfaced.
    pub async fn logout(&self) {
        if let Err(err) = self.inner.storage.clear().await {
            log::warn!(
                target: "marquee::session",
                "msg=\"failed to clear persisted token\" error=\"{err}\""
            );
        }

        self.inner.current.send_replace(None);
    }

    /// Returns the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.inner.current.borrow().clone()
    }

    /// Returns true if a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner.current.borrow().is_some()
    }

    /// Returns the raw bearer token of the current session, if any.
    ///
    /// This is what the API client attaches to outgoing requests.
    pub fn bearer_token(&self) -> Option<SecretString> {
        self.inner
            .current
            .borrow()
            .as_ref()
            .map(|s| s.raw_token.clone())
    }

    /// Subscribes to session changes.
    ///
    /// The receiver yields the new value after every login, logout, and
    /// restore, letting dependents re-evaluate whenever the session
    /// changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.current.subscribe()
    }
}
