use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};

use super::gateway::{AccountGateway, CatalogGateway};
use super::types::{
    ApiMessage, LoginRequest, LoginResponse, Movie, MovieDraft, MoviesPayload, NewComment,
    RegisterRequest,
};
use crate::config::ClientConfig;
use crate::secret::SecretString;
use crate::session::SessionStore;
use crate::ClientError;

/// HTTP implementation of the service gateways.
///
/// Reads the session store on every request: when a session is present,
/// its raw token is attached as a bearer credential; when absent, the
/// request goes out unauthenticated and the server's answer (typically an
/// authorization failure) is returned to the caller unchanged.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl HttpGateway {
    /// Creates a gateway for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ConfigurationError` if the underlying HTTP
    /// client cannot be built.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_owned(),
            session,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attaches the current session's token, if any.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Sends a request and maps non-success statuses to
    /// `ClientError::Api`, extracting the server's `{message}` body when
    /// there is one.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[async_trait]
impl AccountGateway for HttpGateway {
    async fn login(&self, request: &LoginRequest) -> Result<SecretString, ClientError> {
        let response = self
            .send(self.client.post(self.endpoint("/users/login")).json(request))
            .await?;

        let body: serde_json::Value = response.json().await?;
        let login: LoginResponse = serde_json::from_value(body).map_err(|_| {
            ClientError::UnexpectedResponse("login response carried no access token".to_owned())
        })?;

        Ok(login.access)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        self.send(
            self.client
                .post(self.endpoint("/users/register"))
                .json(request),
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for HttpGateway {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let response = self
            .send(self.client.get(self.endpoint("/movies/getMovies")))
            .await?;

        let body: serde_json::Value = response.json().await?;
        MoviesPayload::parse(body)
    }

    async fn add_movie(&self, draft: &MovieDraft) -> Result<(), ClientError> {
        self.send(
            self.client
                .post(self.endpoint("/movies/addMovie"))
                .json(draft),
        )
        .await?;

        Ok(())
    }

    async fn update_movie(&self, movie_id: &str, draft: &MovieDraft) -> Result<(), ClientError> {
        self.send(
            self.client
                .patch(self.endpoint(&format!("/movies/updateMovie/{movie_id}")))
                .json(draft),
        )
        .await?;

        Ok(())
    }

    async fn delete_movie(&self, movie_id: &str) -> Result<(), ClientError> {
        self.send(
            self.client
                .delete(self.endpoint(&format!("/movies/deleteMovie/{movie_id}"))),
        )
        .await?;

        Ok(())
    }

    async fn add_comment(&self, movie_id: &str, comment: &NewComment) -> Result<(), ClientError> {
        self.send(
            self.client
                .post(self.endpoint(&format!("/movies/addComment/{movie_id}")))
                .json(comment),
        )
        .await?;

        Ok(())
    }
}
