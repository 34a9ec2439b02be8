//! # Demo Authentication
//!
//! Login and registration against the mock backend. No accounts are stored:
//! the dashboard role is inferred from the email prefix (`agent…` and
//! `admin…` get those roles, everyone else is a regular user), and a real
//! HS256 JWT is minted so the client side can restore and expire sessions
//! the same way it would against a production API.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::{AuthResponse, AuthUser, LoginRequest, RegisterRequest, Role};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Email the session was opened with
    pub email: String,
    /// Dashboard role
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Encode a session token for an authenticated identity.
pub fn encode_session_token(
    user: &AuthUser,
    secret: &str,
    expiration_hours: i64,
) -> Result<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to encode session token: {}", e)))
}

/// Decode and validate a session token, including its expiry.
pub fn decode_session_token(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Unauthorized(format!("Invalid session token: {}", e)))?;

    Ok(token_data.claims)
}

/// Demo role inference: the email local-part prefix decides the dashboard.
fn infer_role(email: &str) -> Role {
    if email.starts_with("agent") {
        Role::Agent
    } else if email.starts_with("admin") {
        Role::Admin
    } else {
        Role::User
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if !email.contains('@') {
        return Err(ApiError::InvalidInput("Invalid email format".to_string()));
    }
    if password.len() < 6 {
        return Err(ApiError::InvalidInput(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// The simulated auth endpoint pair.
pub struct AuthService {
    config: Config,
}

impl AuthService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Log in with any email/password; the role comes from the email prefix.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        self.config.latency.simulate().await;
        validate_credentials(&req.email, &req.password)?;

        let role = infer_role(&req.email);
        let user = AuthUser {
            id: format!("u_{}", role),
            name: format!("{} User", role.as_str().to_uppercase()),
            email: req.email,
            phone: None,
            role,
        };
        let token = encode_session_token(
            &user,
            &self.config.jwt_secret,
            self.config.jwt_expiration_hours,
        )?;

        info!(user = %user.id, role = %role, "login succeeded");
        Ok(AuthResponse {
            user,
            token,
            message: "Login successful".to_string(),
        })
    }

    /// Register a new identity with a caller-chosen role.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse> {
        self.config.latency.simulate().await;
        validate_credentials(&req.email, &req.password)?;
        if req.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("Name cannot be empty".to_string()));
        }

        let user = AuthUser {
            id: format!("u_{}", Uuid::new_v4().simple()),
            name: req.name,
            email: req.email,
            phone: req.phone,
            role: req.role,
        };
        let token = encode_session_token(
            &user,
            &self.config.jwt_secret,
            self.config.jwt_expiration_hours,
        )?;

        debug!(user = %user.id, role = %user.role, "registration succeeded");
        Ok(AuthResponse {
            user,
            token,
            message: "Registration successful".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(Config::demo())
    }

    #[tokio::test]
    async fn login_infers_role_from_email_prefix() {
        let svc = service();

        let user = svc
            .login(LoginRequest {
                email: "user@zpay.dev".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.user.role, Role::User);

        let agent = svc
            .login(LoginRequest {
                email: "agent01@zpay.dev".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(agent.user.role, Role::Agent);

        let admin = svc
            .login(LoginRequest {
                email: "admin@zpay.dev".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(admin.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn token_round_trips_with_role_claim() {
        let svc = service();
        let resp = svc
            .login(LoginRequest {
                email: "admin@zpay.dev".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let claims = decode_session_token(&resp.token, &Config::demo().jwt_secret).unwrap();
        assert_eq!(claims.sub, resp.user.id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.email, "admin@zpay.dev");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let svc = service();
        let err = svc
            .login(LoginRequest {
                email: "not-an-email".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn garbage_token_fails_decode() {
        let err = decode_session_token("not.a.token", &Config::demo().jwt_secret).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
