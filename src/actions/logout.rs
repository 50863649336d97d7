use chrono::Utc;

use crate::events::{dispatch, SessionEvent};
use crate::routing::Route;
use crate::session::SessionStore;

pub struct LogoutAction {
    session: SessionStore,
}

impl LogoutAction {
    pub fn new(session: SessionStore) -> Self {
        LogoutAction { session }
    }

    /// Logs out: clears the session and its persisted token.
    ///
    /// Cannot fail. Returns the route to navigate to (the login view);
    /// this explicit redirect is the only navigation a disappearing
    /// session triggers.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub async fn execute(&self) -> Route {
        let email = self.session.current().map(|s| s.email().to_owned());

        self.session.logout().await;

        dispatch(SessionEvent::LogoutSuccess {
            email,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "marquee_auth",
            "msg=\"logout success\""
        );

        Route::LOGOUT_LANDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockGateway;
    use crate::actions::LoginAction;
    use crate::session::{InMemoryTokenStorage, TokenStorage};

    #[tokio::test]
    async fn test_logout_clears_session_and_redirects() {
        let gateway = MockGateway::new();
        gateway.register_account("user@email.com", "securepassword", false);

        let storage = InMemoryTokenStorage::new();
        let store = SessionStore::new(storage.clone());

        let login = LoginAction::new(gateway, store.clone());
        login.execute("user@email.com", "securepassword").await.unwrap();
        assert!(store.is_authenticated());
        assert!(storage.load().await.unwrap().is_some());

        let logout = LogoutAction::new(store.clone());
        let route = logout.execute().await;

        assert_eq!(route, Route::Login);
        assert!(!store.is_authenticated());
        assert_eq!(storage.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_without_session_succeeds() {
        let store = SessionStore::new(InMemoryTokenStorage::new());
        let logout = LogoutAction::new(store.clone());

        let route = logout.execute().await;
        assert_eq!(route, Route::Login);
        assert!(!store.is_authenticated());
    }
}
