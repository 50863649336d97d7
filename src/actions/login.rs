use chrono::Utc;

use crate::api::{AccountGateway, LoginRequest};
use crate::events::{dispatch, SessionEvent};
use crate::secret::SecretString;
use crate::session::{Session, SessionStore};
use crate::validators::{validate_email, validate_password};
use crate::ClientError;

pub struct LoginAction<A: AccountGateway> {
    gateway: A,
    session: SessionStore,
}

impl<A: AccountGateway> LoginAction<A> {
    pub fn new(gateway: A, session: SessionStore) -> Self {
        LoginAction { gateway, session }
    }

    /// Authenticates against the service and replaces the current
    /// session with one decoded from the returned token.
    ///
    /// # Returns
    ///
    /// - `Ok(session)` - logged in; the caller should navigate to
    ///   [`Route::AUTHENTICATED_LANDING`](crate::Route::AUTHENTICATED_LANDING)
    /// - `Err(_)` - validation, service, token, or storage errors; the
    ///   previous session is untouched
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        validate_email(email)?;
        validate_password(password)?;

        let request = LoginRequest {
            email: email.to_owned(),
            password: SecretString::new(password),
        };

        let token = match self.gateway.login(&request).await {
            Ok(token) => token,
            Err(err) => {
                dispatch(SessionEvent::LoginFailed {
                    email: email.to_owned(),
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;
                return Err(err);
            }
        };

        let session = match self.session.login(token).await {
            Ok(session) => session,
            Err(err) => {
                dispatch(SessionEvent::LoginFailed {
                    email: email.to_owned(),
                    reason: err.to_string(),
                    at: Utc::now(),
                })
                .await;
                return Err(err);
            }
        };

        dispatch(SessionEvent::LoginSuccess {
            email: session.email().to_owned(),
            is_admin: session.is_admin(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "marquee_auth",
            "msg=\"login success\""
        );

        Ok(session)
    }
}
