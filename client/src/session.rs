//! # Auth Session
//!
//! The current session (token + identity) and its persistence across
//! restarts. Storage problems are never fatal: a file that is missing,
//! unreadable, or holds an expired token simply means "logged out".

use std::path::PathBuf;
use std::sync::Arc;

use backend::auth::decode_session_token;
use backend::Config;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{AuthUser, LoginRequest, RegisterRequest};
use tracing::{debug, info, warn};

use crate::core::error::Result;
use crate::core::service::AuthApi;

/// An open session. The token and the identity always travel together; a
/// missing session is `None`, never a half-filled struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// On-disk shape: both fields nullable, so a logged-out state round-trips
/// as `{"token":null,"user":null}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedAuth {
    token: Option<String>,
    user: Option<AuthUser>,
}

/// Durable storage for the session, one JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted session. Any failure reads as "no session".
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let persisted: PersistedAuth = serde_json::from_str(&raw).ok()?;
        match (persisted.token, persisted.user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        }
    }

    /// Persist the session. Failures are logged and swallowed.
    pub fn save(&self, session: &Session) {
        self.write(PersistedAuth {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
        });
    }

    /// Persist the logged-out state. Failures are logged and swallowed.
    pub fn clear(&self) {
        self.write(PersistedAuth::default());
    }

    fn write(&self, persisted: PersistedAuth) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let result = serde_json::to_string(&persisted)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                std::fs::write(&self.path, json).map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "failed to persist session");
        }
    }
}

/// Owns the live session and the auth flows that change it.
pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    store: SessionStore,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Restore from durable storage, dropping sessions whose token no longer
    /// decodes (expired, tampered, or signed with another secret).
    pub fn new(api: Arc<dyn AuthApi>, store: SessionStore, config: &Config) -> Self {
        let restored = match store.load() {
            Some(session) => match decode_session_token(&session.token, &config.jwt_secret) {
                Ok(_) => {
                    debug!(user = %session.user.id, "session restored");
                    Some(session)
                }
                Err(_) => {
                    debug!("persisted session token invalid or expired, discarding");
                    store.clear();
                    None
                }
            },
            None => None,
        };

        Self {
            api,
            store,
            current: RwLock::new(restored),
        }
    }

    /// Snapshot of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    pub async fn login(&self, req: LoginRequest) -> Result<Session> {
        let resp = self.api.login(req).await?;
        let session = Session {
            token: resp.token,
            user: resp.user,
        };
        self.store.save(&session);
        *self.current.write() = Some(session.clone());
        info!(user = %session.user.id, role = %session.user.role, "logged in");
        Ok(session)
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<Session> {
        let resp = self.api.register(req).await?;
        let session = Session {
            token: resp.token,
            user: resp.user,
        };
        self.store.save(&session);
        *self.current.write() = Some(session.clone());
        info!(user = %session.user.id, role = %session.user.role, "registered");
        Ok(session)
    }

    pub fn logout(&self) {
        if let Some(session) = self.current.write().take() {
            info!(user = %session.user.id, "logged out");
        }
        self.store.clear();
    }
}
