use std::sync::{Arc, RwLock};

use chrono::Utc;

use super::RefreshHandle;
use crate::api::{CatalogGateway, Movie, NewComment};
use crate::events::{dispatch, SessionEvent};
use crate::session::SessionStore;
use crate::validators::validate_comment;
use crate::ClientError;

/// The regular user's catalog view: list movies and comment on them.
pub struct UserDashboard<G: CatalogGateway> {
    gateway: Arc<G>,
    session: SessionStore,
    movies: Arc<RwLock<Vec<Movie>>>,
}

// derive would require G: Clone
impl<G: CatalogGateway> Clone for UserDashboard<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: self.session.clone(),
            movies: Arc::clone(&self.movies),
        }
    }
}

impl<G: CatalogGateway + 'static> UserDashboard<G> {
    /// Creates the dashboard with an empty snapshot. Call
    /// [`refresh`](Self::refresh) (the mount fetch) to populate it.
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway: Arc::new(gateway),
            session,
            movies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the current snapshot of the movie list.
    pub fn movies(&self) -> Vec<Movie> {
        self.movies.read().map(|g| g.clone()).unwrap_or_default()
    }

    /// Fetches a fresh list from the service, replacing the snapshot.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "user_refresh", skip_all, err)
    )]
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let list = self.gateway.fetch_movies().await?;

        if let Ok(mut movies) = self.movies.write() {
            *movies = list;
        }

        Ok(())
    }

    /// Starts a refresh in the background.
    ///
    /// Dropping the returned handle aborts the request; a view that
    /// unmounts mid-fetch takes its in-flight call down with it.
    pub fn spawn_refresh(&self) -> RefreshHandle {
        let dashboard = self.clone();

        RefreshHandle::new(tokio::spawn(async move {
            if let Err(err) = dashboard.refresh().await {
                log::warn!(
                    target: "marquee::dashboard",
                    "msg=\"background refresh failed\" error=\"{err}\""
                );
            }
        }))
    }

    /// Posts a comment on a movie as the logged-in user, then re-fetches
    /// the list so the new comment shows up.
    ///
    /// # Errors
    ///
    /// - `ClientError::Validation(_)` - blank comment; no request issued
    /// - `ClientError::Unauthenticated` - no session; no request issued
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_comment", skip_all, err)
    )]
    pub async fn add_comment(&self, movie_id: &str, text: &str) -> Result<(), ClientError> {
        validate_comment(text)?;

        let session = self.session.current().ok_or(ClientError::Unauthenticated)?;

        let comment = NewComment {
            comment: text.to_owned(),
            user: session.claims.id.clone(),
        };

        self.gateway.add_comment(movie_id, &comment).await?;

        dispatch(SessionEvent::CommentAdded {
            movie_id: movie_id.to_owned(),
            at: Utc::now(),
        })
        .await;

        self.refresh().await
    }
}
