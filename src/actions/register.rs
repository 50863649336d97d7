use chrono::Utc;

use crate::api::{AccountGateway, RegisterRequest};
use crate::events::{dispatch, SessionEvent};
use crate::secret::SecretString;
use crate::validators::{validate_email, validate_password, validate_password_confirmation};
use crate::ClientError;

pub struct RegisterAction<A: AccountGateway> {
    gateway: A,
}

impl<A: AccountGateway> RegisterAction<A> {
    pub fn new(gateway: A) -> Self {
        RegisterAction { gateway }
    }

    /// Creates an account with the service.
    ///
    /// Registration does not log the user in; the caller should navigate
    /// to the login view on success, as the service issues no token here.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register", skip_all, err)
    )]
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<(), ClientError> {
        validate_email(email)?;
        validate_password(password)?;
        validate_password_confirmation(password, password_confirmation)?;

        let request = RegisterRequest {
            email: email.to_owned(),
            password: SecretString::new(password),
        };

        self.gateway.register(&request).await?;

        dispatch(SessionEvent::RegistrationSuccess {
            email: email.to_owned(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "marquee_auth",
            "msg=\"registration success\""
        );

        Ok(())
    }
}
