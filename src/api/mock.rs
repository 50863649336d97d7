#![allow(clippy::unwrap_used)]

//! In-memory gateway for tests.
//!
//! Behaves like a well-behaved instance of the service: accounts can be
//! seeded, login mints a decodable token, and catalog mutations are
//! honored so a delete really disappears from the next fetch. Call
//! counters make "no network call was issued" assertable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header};

use super::gateway::{AccountGateway, CatalogGateway};
use super::types::{LoginRequest, Movie, MovieDraft, NewComment, RegisterRequest};
use crate::secret::SecretString;
use crate::ClientError;

#[derive(Debug, Clone)]
pub struct MockAccount {
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// How many times each endpoint was hit.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub fetch_movies: usize,
    pub add_movie: usize,
    pub update_movie: usize,
    pub delete_movie: usize,
    pub add_comment: usize,
}

impl CallCounts {
    /// Total requests across all endpoints.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.fetch_movies
            + self.add_movie
            + self.update_movie
            + self.delete_movie
            + self.add_comment
    }
}

#[derive(Clone, Default)]
pub struct MockGateway {
    pub movies: Arc<Mutex<Vec<Movie>>>,
    pub accounts: Arc<Mutex<Vec<MockAccount>>>,
    pub calls: Arc<Mutex<CallCounts>>,
    fail_next: Arc<Mutex<Option<ClientError>>>,
    latency: Arc<Mutex<Option<Duration>>>,
    next_id: Arc<AtomicUsize>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an account that `login` will accept.
    pub fn register_account(&self, email: &str, password: &str, is_admin: bool) {
        self.accounts.lock().unwrap().push(MockAccount {
            email: email.to_owned(),
            password: password.to_owned(),
            is_admin,
        });
    }

    /// Seeds a movie as if it already existed server-side.
    pub fn seed_movie(&self, title: &str, director: &str, year: i32) -> String {
        let id = format!("m{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.movies.lock().unwrap().push(Movie {
            id: id.clone(),
            title: title.to_owned(),
            director: director.to_owned(),
            year,
            genre: String::new(),
            description: String::new(),
            comments: Vec::new(),
        });
        id
    }

    /// Makes the next request fail with `err`.
    pub fn fail_next(&self, err: ClientError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Delays every request by `duration`, to exercise in-flight
    /// cancellation.
    pub fn set_latency(&self, duration: Duration) {
        *self.latency.lock().unwrap() = Some(duration);
    }

    /// Returns a snapshot of the call counters.
    pub fn call_counts(&self) -> CallCounts {
        *self.calls.lock().unwrap()
    }

    fn take_failure(&self) -> Result<(), ClientError> {
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.lock().unwrap();
        if let Some(duration) = latency {
            tokio::time::sleep(duration).await;
        }
    }

    fn mint_token(account: &MockAccount, index: usize) -> SecretString {
        let key = EncodingKey::from_secret(b"mock-gateway-secret");
        let raw = jsonwebtoken::encode(
            &Header::default(),
            &serde_json::json!({
                "id": format!("u{index}"),
                "email": account.email,
                "isAdmin": account.is_admin,
            }),
            &key,
        )
        .unwrap();
        SecretString::new(raw)
    }
}

#[async_trait]
impl AccountGateway for MockGateway {
    async fn login(&self, request: &LoginRequest) -> Result<SecretString, ClientError> {
        self.calls.lock().unwrap().login += 1;
        self.take_failure()?;

        let accounts = self.accounts.lock().unwrap();
        let found = accounts
            .iter()
            .enumerate()
            .find(|(_, a)| a.email == request.email && a.password == request.password.expose_secret());

        match found {
            Some((index, account)) => Ok(Self::mint_token(account, index)),
            None => Err(ClientError::Api {
                status: 401,
                message: "Email and password do not match".to_owned(),
            }),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        self.calls.lock().unwrap().register += 1;
        self.take_failure()?;

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == request.email) {
            return Err(ClientError::Api {
                status: 400,
                message: "Email already registered".to_owned(),
            });
        }

        accounts.push(MockAccount {
            email: request.email.clone(),
            password: request.password.expose_secret().to_owned(),
            is_admin: false,
        });

        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for MockGateway {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
        self.calls.lock().unwrap().fetch_movies += 1;
        self.take_failure()?;
        self.simulate_latency().await;

        Ok(self.movies.lock().unwrap().clone())
    }

    async fn add_movie(&self, draft: &MovieDraft) -> Result<(), ClientError> {
        self.calls.lock().unwrap().add_movie += 1;
        self.take_failure()?;

        let id = format!("m{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.movies.lock().unwrap().push(Movie {
            id,
            title: draft.title.clone(),
            director: draft.director.clone(),
            year: draft.year,
            genre: draft.genre.clone(),
            description: draft.description.clone(),
            comments: Vec::new(),
        });

        Ok(())
    }

    async fn update_movie(&self, movie_id: &str, draft: &MovieDraft) -> Result<(), ClientError> {
        self.calls.lock().unwrap().update_movie += 1;
        self.take_failure()?;

        let mut movies = self.movies.lock().unwrap();
        if let Some(movie) = movies.iter_mut().find(|m| m.id == movie_id) {
            movie.title = draft.title.clone();
            movie.director = draft.director.clone();
            movie.year = draft.year;
            movie.genre = draft.genre.clone();
            movie.description = draft.description.clone();
            Ok(())
        } else {
            Err(ClientError::Api {
                status: 404,
                message: "Movie not found".to_owned(),
            })
        }
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().delete_movie += 1;
        self.take_failure()?;

        let mut movies = self.movies.lock().unwrap();
        let len_before = movies.len();
        movies.retain(|m| m.id != movie_id);

        if movies.len() < len_before {
            Ok(())
        } else {
            Err(ClientError::Api {
                status: 404,
                message: "Movie not found".to_owned(),
            })
        }
    }

    async fn add_comment(&self, movie_id: &str, comment: &NewComment) -> Result<(), ClientError> {
        self.calls.lock().unwrap().add_comment += 1;
        self.take_failure()?;

        let mut movies = self.movies.lock().unwrap();
        if let Some(movie) = movies.iter_mut().find(|m| m.id == movie_id) {
            movie.comments.push(comment.comment.clone());
            Ok(())
        } else {
            Err(ClientError::Api {
                status: 404,
                message: "Movie not found".to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenDecoder;

    #[tokio::test]
    async fn test_login_mints_decodable_token() {
        let gateway = MockGateway::new();
        gateway.register_account("a@b.com", "secret", true);

        let token = gateway
            .login(&LoginRequest {
                email: "a@b.com".to_owned(),
                password: SecretString::new("secret"),
            })
            .await
            .unwrap();

        let claims = TokenDecoder::new().decode(token.expose_secret()).unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.is_admin);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let gateway = MockGateway::new();
        gateway.register_account("a@b.com", "secret", false);

        let result = gateway
            .login(&LoginRequest {
                email: "a@b.com".to_owned(),
                password: SecretString::new("wrong"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ClientError::Api { status: 401, .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_from_next_fetch() {
        let gateway = MockGateway::new();
        let id = gateway.seed_movie("Alien", "Ridley Scott", 1979);
        gateway.seed_movie("Blade Runner", "Ridley Scott", 1982);

        gateway.delete_movie(&id).await.unwrap();

        let movies = gateway.fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert!(movies.iter().all(|m| m.id != id));
    }

    #[tokio::test]
    async fn test_call_counters() {
        let gateway = MockGateway::new();
        gateway.seed_movie("Alien", "Ridley Scott", 1979);

        gateway.fetch_movies().await.unwrap();
        gateway.fetch_movies().await.unwrap();

        let calls = gateway.call_counts();
        assert_eq!(calls.fetch_movies, 2);
        assert_eq!(calls.total(), 2);
    }

    #[tokio::test]
    async fn test_fail_next() {
        let gateway = MockGateway::new();
        gateway.fail_next(ClientError::Transport("connection reset".to_owned()));

        let result = gateway.fetch_movies().await;
        assert_eq!(
            result.unwrap_err(),
            ClientError::Transport("connection reset".to_owned())
        );

        // the failure is consumed
        assert!(gateway.fetch_movies().await.is_ok());
    }
}
