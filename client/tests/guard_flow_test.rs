//! Navigation flows against a live session: the guard runs on every attempt
//! and the remembered target is honored after login.

use std::path::PathBuf;
use std::sync::Arc;

use backend::{Config, MockBackend};
use client::{NavOutcome, Navigator, Route, SessionManager, SessionStore};
use shared::LoginRequest;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zpay_guard_test_{}_{}.json", std::process::id(), name))
}

fn harness(name: &str) -> (Arc<SessionManager>, Navigator) {
    let path = temp_path(name);
    let _ = std::fs::remove_file(&path);
    let config = Config::demo();
    let backend = Arc::new(MockBackend::new(config.clone()));
    let sessions = Arc::new(SessionManager::new(
        backend,
        SessionStore::new(path),
        &config,
    ));
    let nav = Navigator::new(Arc::clone(&sessions));
    (sessions, nav)
}

fn login(email: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn denied_navigation_resumes_after_login() {
    let (sessions, nav) = harness("resume");

    let outcome = nav.navigate(Route::AdminDashboard);
    assert_eq!(
        outcome,
        NavOutcome::RedirectToLogin {
            from: "/dashboard/admin"
        }
    );
    assert_eq!(nav.current(), Route::Login);

    sessions.login(login("admin@zpay.dev")).await.unwrap();
    assert_eq!(nav.resume_after_login(), Route::AdminDashboard);
}

#[tokio::test]
async fn resume_with_the_wrong_role_falls_back_home() {
    let (sessions, nav) = harness("wrong_role");

    nav.navigate(Route::AdminDashboard);
    // The login that follows opens a user session, not an admin one.
    sessions.login(login("user@zpay.dev")).await.unwrap();
    assert_eq!(nav.resume_after_login(), Route::Home);
}

#[tokio::test]
async fn the_guard_runs_on_every_navigation() {
    let (sessions, nav) = harness("every_nav");

    sessions.login(login("agent@zpay.dev")).await.unwrap();
    assert_eq!(
        nav.navigate(Route::AgentDashboard),
        NavOutcome::Render(Route::AgentDashboard)
    );

    // The session changed between navigations; the guard notices.
    sessions.logout();
    assert!(matches!(
        nav.navigate(Route::AgentDashboard),
        NavOutcome::RedirectToLogin { .. }
    ));
}
