//! End-to-end session lifecycle through the public API: login, logout,
//! restore from persisted storage, and the routing that hangs off it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use jsonwebtoken::{EncodingKey, Header};

use marquee::routing::{self, Route};
use marquee::{
    DashboardKind, FileTokenStorage, InMemoryTokenStorage, SecretString, SessionStore, TokenStorage,
    ViewTarget,
};

/// Mints a token the way the service does; the client decodes it without
/// the secret.
fn mint_token(id: &str, email: &str, is_admin: bool) -> SecretString {
    let key = EncodingKey::from_secret(b"service-side-secret");
    let raw = jsonwebtoken::encode(
        &Header::default(),
        &serde_json::json!({"id": id, "email": email, "isAdmin": is_admin}),
        &key,
    )
    .unwrap();
    SecretString::new(raw)
}

#[tokio::test]
async fn test_login_then_logout_leaves_nothing_behind() {
    let storage = InMemoryTokenStorage::new();
    let store = SessionStore::new(storage.clone());

    store
        .login(mint_token("u1", "a@b.com", false))
        .await
        .unwrap();
    assert!(store.is_authenticated());
    assert!(storage.load().await.unwrap().is_some());

    store.logout().await;

    assert_eq!(store.current(), None);
    assert_eq!(storage.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_admin_claim_selects_admin_dashboard() {
    let store = SessionStore::new(InMemoryTokenStorage::new());
    let session = store
        .login(mint_token("u1", "a@b.com", true))
        .await
        .unwrap();

    assert!(session.claims.is_admin);
    assert_eq!(
        routing::select_view(Some(&session)),
        ViewTarget::AdminDashboard
    );
    assert_eq!(
        DashboardKind::for_session(Some(&session)),
        DashboardKind::Admin
    );
}

#[tokio::test]
async fn test_login_transition_navigates_to_movies() {
    let store = SessionStore::new(InMemoryTokenStorage::new());

    let before = store.current();
    let session = store
        .login(mint_token("u1", "a@b.com", false))
        .await
        .unwrap();

    assert_eq!(
        routing::on_session_change(before.as_ref(), Some(&session)),
        Some(Route::Movies)
    );
}

#[tokio::test]
async fn test_session_survives_restart_via_file_storage() {
    let dir = tempfile::tempdir().unwrap();

    // first run: log in
    {
        let storage = FileTokenStorage::new(dir.path()).unwrap();
        let store = SessionStore::new(storage);
        store
            .login(mint_token("u1", "a@b.com", true))
            .await
            .unwrap();
    }

    // second run: restore from disk
    let storage = FileTokenStorage::new(dir.path()).unwrap();
    let store = SessionStore::new(storage);
    let restored = store.initialize().await;

    let session = restored.expect("persisted session should restore");
    assert_eq!(session.email(), "a@b.com");
    assert!(session.is_admin());
}

#[tokio::test]
async fn test_stale_token_cleared_on_startup() {
    let dir = tempfile::tempdir().unwrap();

    let storage = FileTokenStorage::new(dir.path()).unwrap();
    storage
        .save(&SecretString::new("not-a-decodable-token"))
        .await
        .unwrap();

    let store = SessionStore::new(FileTokenStorage::new(dir.path()).unwrap());
    assert_eq!(store.initialize().await, None);
    assert!(!store.is_authenticated());

    // the stale token was removed from disk
    let reopened = FileTokenStorage::new(dir.path()).unwrap();
    assert_eq!(reopened.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_expired_token_treated_as_logged_out() {
    let key = EncodingKey::from_secret(b"service-side-secret");
    let raw = jsonwebtoken::encode(
        &Header::default(),
        &serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "exp": chrono::Utc::now().timestamp() - 3600,
        }),
        &key,
    )
    .unwrap();

    let storage = InMemoryTokenStorage::with_token(raw);
    let store = SessionStore::new(storage.clone());

    assert_eq!(store.initialize().await, None);
    assert_eq!(storage.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_subscribers_see_login_and_logout() {
    let store = SessionStore::new(InMemoryTokenStorage::new());
    let mut rx = store.subscribe();

    store
        .login(mint_token("u1", "a@b.com", false))
        .await
        .unwrap();
    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().as_ref().map(|s| s.email().to_owned()),
        Some("a@b.com".to_owned())
    );

    store.logout().await;
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_none());
}
