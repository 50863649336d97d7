use std::sync::{Arc, RwLock};

use chrono::Utc;

use super::RefreshHandle;
use crate::api::{CatalogGateway, Movie, MovieDraft};
use crate::events::{dispatch, SessionEvent};
use crate::validators::{validate_director, validate_title};
use crate::ClientError;

/// The administrator's catalog view: list, add, update, delete.
///
/// Role selection is the caller's job (see
/// [`DashboardKind`](crate::DashboardKind)); nothing here grants
/// privileges, since the service re-checks the admin flag on every
/// mutation.
pub struct AdminDashboard<G: CatalogGateway> {
    gateway: Arc<G>,
    movies: Arc<RwLock<Vec<Movie>>>,
}

// derive would require G: Clone
impl<G: CatalogGateway> Clone for AdminDashboard<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            movies: Arc::clone(&self.movies),
        }
    }
}

impl<G: CatalogGateway + 'static> AdminDashboard<G> {
    /// Creates the dashboard with an empty snapshot. Call
    /// [`refresh`](Self::refresh) (the mount fetch) to populate it.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
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
        tracing::instrument(name = "admin_refresh", skip_all, err)
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

    /// Adds a movie, then re-fetches the list.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any network call when the title
    /// or director is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_movie", skip_all, err)
    )]
    pub async fn add_movie(&self, draft: &MovieDraft) -> Result<(), ClientError> {
        validate_title(&draft.title)?;
        validate_director(&draft.director)?;

        self.gateway.add_movie(draft).await?;

        dispatch(SessionEvent::MovieAdded {
            title: draft.title.clone(),
            at: Utc::now(),
        })
        .await;

        self.refresh().await
    }

    /// Updates a movie, then re-fetches the list.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_movie", skip_all, err)
    )]
    pub async fn update_movie(&self, movie_id: &str, draft: &MovieDraft) -> Result<(), ClientError> {
        validate_title(&draft.title)?;
        validate_director(&draft.director)?;

        self.gateway.update_movie(movie_id, draft).await?;

        dispatch(SessionEvent::MovieUpdated {
            movie_id: movie_id.to_owned(),
            at: Utc::now(),
        })
        .await;

        self.refresh().await
    }

    /// Deletes a movie, then re-fetches the list.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_movie", skip_all, err)
    )]
    pub async fn delete_movie(&self, movie_id: &str) -> Result<(), ClientError> {
        self.gateway.delete_movie(movie_id).await?;

        dispatch(SessionEvent::MovieDeleted {
            movie_id: movie_id.to_owned(),
            at: Utc::now(),
        })
        .await;

        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockGateway;
    use crate::validators::ValidationError;

    fn draft(title: &str, director: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_owned(),
            director: director.to_owned(),
            year: 1979,
            genre: "Horror".to_owned(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_mount_fetch_populates_snapshot() {
        let gateway = MockGateway::new();
        gateway.seed_movie("Alien", "Ridley Scott", 1979);

        let dashboard = AdminDashboard::new(gateway);
        assert!(dashboard.movies().is_empty());

        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.movies().len(), 1);
    }

    #[tokio::test]
    async fn test_add_movie_appears_after_refetch() {
        let gateway = MockGateway::new();
        let dashboard = AdminDashboard::new(gateway);

        dashboard.add_movie(&draft("Alien", "Ridley Scott")).await.unwrap();

        let movies = dashboard.movies();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Alien");
    }

    #[tokio::test]
    async fn test_add_movie_empty_title_issues_no_request() {
        let gateway = MockGateway::new();
        let dashboard = AdminDashboard::new(gateway.clone());

        let result = dashboard.add_movie(&draft("", "Ridley Scott")).await;
        assert_eq!(
            result.unwrap_err(),
            ClientError::Validation(ValidationError::TitleEmpty)
        );
        assert_eq!(gateway.call_counts().total(), 0);
    }

    #[tokio::test]
    async fn test_add_movie_empty_director_issues_no_request() {
        let gateway = MockGateway::new();
        let dashboard = AdminDashboard::new(gateway.clone());

        let result = dashboard.add_movie(&draft("Alien", "  ")).await;
        assert_eq!(
            result.unwrap_err(),
            ClientError::Validation(ValidationError::DirectorEmpty)
        );
        assert_eq!(gateway.call_counts().total(), 0);
    }

    #[tokio::test]
    async fn test_update_movie_changes_fields() {
        let gateway = MockGateway::new();
        let id = gateway.seed_movie("Allen", "Ridley Scott", 1979);

        let dashboard = AdminDashboard::new(gateway);
        dashboard.refresh().await.unwrap();

        dashboard.update_movie(&id, &draft("Alien", "Ridley Scott")).await.unwrap();

        let movies = dashboard.movies();
        assert_eq!(movies[0].title, "Alien");
        assert_eq!(movies[0].genre, "Horror");
    }

    #[tokio::test]
    async fn test_delete_movie_disappears_from_snapshot() {
        let gateway = MockGateway::new();
        let id = gateway.seed_movie("Alien", "Ridley Scott", 1979);
        gateway.seed_movie("Blade Runner", "Ridley Scott", 1982);

        let dashboard = AdminDashboard::new(gateway);
        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.movies().len(), 2);

        dashboard.delete_movie(&id).await.unwrap();

        let movies = dashboard.movies();
        assert_eq!(movies.len(), 1);
        assert!(movies.iter().all(|m| m.id != id));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let gateway = MockGateway::new();
        gateway.seed_movie("Alien", "Ridley Scott", 1979);

        let dashboard = AdminDashboard::new(gateway.clone());
        dashboard.refresh().await.unwrap();

        gateway.fail_next(ClientError::Transport("connection reset".to_owned()));
        assert!(dashboard.refresh().await.is_err());

        // the view keeps showing the last good snapshot and can retry
        assert_eq!(dashboard.movies().len(), 1);
        assert!(dashboard.refresh().await.is_ok());
    }

    #[tokio::test]
    async fn test_dropped_refresh_never_writes_snapshot() {
        let gateway = MockGateway::new();
        gateway.seed_movie("Alien", "Ridley Scott", 1979);
        gateway.set_latency(std::time::Duration::from_millis(50));

        let dashboard = AdminDashboard::new(gateway);

        let handle = dashboard.spawn_refresh();
        drop(handle); // view unmounted mid-request

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(dashboard.movies().is_empty());
    }
}
