//! Session persistence: survive restarts, swallow storage corruption,
//! discard dead tokens.

use std::path::PathBuf;
use std::sync::Arc;

use backend::auth::encode_session_token;
use backend::{Config, MockBackend};
use client::{Session, SessionManager, SessionStore};
use shared::{AuthUser, LoginRequest, Role};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zpay_session_test_{}_{}.json", std::process::id(), name))
}

fn demo_backend() -> Arc<MockBackend> {
    Arc::new(MockBackend::new(Config::demo()))
}

#[tokio::test]
async fn login_persists_and_survives_a_restart() {
    let path = temp_path("restart");
    let _ = std::fs::remove_file(&path);
    let config = Config::demo();
    let backend = demo_backend();

    {
        let manager = SessionManager::new(backend.clone(), SessionStore::new(&path), &config);
        assert!(manager.current().is_none());
        let session = manager
            .login(LoginRequest {
                email: "admin@zpay.dev".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.user.role, Role::Admin);
    }

    // A fresh manager over the same file restores the session.
    let manager = SessionManager::new(backend, SessionStore::new(&path), &config);
    let restored = manager.current().expect("session survives restart");
    assert_eq!(restored.user.role, Role::Admin);
    assert_eq!(restored.user.email, "admin@zpay.dev");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn corrupt_storage_reads_as_logged_out() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let manager = SessionManager::new(demo_backend(), SessionStore::new(&path), &Config::demo());
    assert!(manager.current().is_none());
    assert!(!manager.is_authenticated());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn logout_clears_the_persisted_session() {
    let path = temp_path("logout");
    let _ = std::fs::remove_file(&path);
    let config = Config::demo();
    let backend = demo_backend();

    let manager = SessionManager::new(backend.clone(), SessionStore::new(&path), &config);
    manager
        .login(LoginRequest {
            email: "user@zpay.dev".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    manager.logout();
    assert!(manager.current().is_none());

    // The file now holds the logged-out shape, and restores as no session.
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("null"));
    let manager = SessionManager::new(backend, SessionStore::new(&path), &config);
    assert!(manager.current().is_none());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn expired_token_is_discarded_on_restore() {
    let path = temp_path("expired");
    let config = Config::demo();

    let user = AuthUser {
        id: "u_user".to_string(),
        name: "USER User".to_string(),
        email: "user@zpay.dev".to_string(),
        phone: None,
        role: Role::User,
    };
    // Expired an hour ago.
    let token = encode_session_token(&user, &config.jwt_secret, -1).unwrap();
    SessionStore::new(&path).save(&Session { token, user });

    let manager = SessionManager::new(demo_backend(), SessionStore::new(&path), &config);
    assert!(manager.current().is_none());

    let _ = std::fs::remove_file(&path);
}
