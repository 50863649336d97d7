use serde::{Deserialize, Serialize};

use crate::secret::SecretString;
use crate::ClientError;

// Request DTOs

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: SecretString,
}

/// Editable fields of a movie, sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
}

/// Body of `POST /movies/addComment/:id`. `user` is the commenting
/// user's subject id from the session claims.
#[derive(Debug, Serialize)]
pub struct NewComment {
    pub comment: String,
    pub user: String,
}

// Response DTOs

/// A movie as the service returns it.
///
/// The client never owns this data: each fetch yields a fresh transient
/// snapshot and mutations go back through the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Service-assigned id; arrives as `id` or `_id` depending on the
    /// endpoint.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Successful login body: `{"access": "<token>"}`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: SecretString,
}

/// Error body the service uses across endpoints: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// The two shapes `GET /movies/getMovies` is known to answer with: an
/// envelope with a `movies` field, or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MoviesPayload {
    Wrapped { movies: Vec<Movie> },
    Bare(Vec<Movie>),
}

impl MoviesPayload {
    /// Normalizes either shape into the movie list.
    pub fn into_movies(self) -> Vec<Movie> {
        match self {
            MoviesPayload::Wrapped { movies } => movies,
            MoviesPayload::Bare(movies) => movies,
        }
    }

    /// Parses a response body, with a defined error for shapes that are
    /// neither an envelope nor a bare list.
    pub fn parse(body: serde_json::Value) -> Result<Vec<Movie>, ClientError> {
        serde_json::from_value::<MoviesPayload>(body)
            .map(MoviesPayload::into_movies)
            .map_err(|_| {
                ClientError::UnexpectedResponse(
                    "movie list is neither {movies: [...]} nor a bare list".to_owned(),
                )
            })
    }
}
