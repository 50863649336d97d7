use async_trait::async_trait;

use super::types::{LoginRequest, Movie, MovieDraft, NewComment, RegisterRequest};
use crate::secret::SecretString;
use crate::ClientError;

/// Account endpoints of the service (`/users/*`).
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// `POST /users/login`. Returns the bearer token on success.
    async fn login(&self, request: &LoginRequest) -> Result<SecretString, ClientError>;

    /// `POST /users/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError>;
}

/// Catalog endpoints of the service (`/movies/*`).
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// `GET /movies/getMovies`. Returns a fresh snapshot of the list.
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError>;

    /// `POST /movies/addMovie`.
    async fn add_movie(&self, draft: &MovieDraft) -> Result<(), ClientError>;

    /// `PATCH /movies/updateMovie/:id`.
    async fn update_movie(&self, movie_id: &str, draft: &MovieDraft) -> Result<(), ClientError>;

    /// `DELETE /movies/deleteMovie/:id`.
    async fn delete_movie(&self, movie_id: &str) -> Result<(), ClientError>;

    /// `POST /movies/addComment/:id`.
    async fn add_comment(&self, movie_id: &str, comment: &NewComment) -> Result<(), ClientError>;
}
