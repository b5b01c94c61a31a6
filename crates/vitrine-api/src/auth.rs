use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, response::IntoResponse};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::info;

use vitrine_db::Database;
use vitrine_types::api::{FieldError, LoginRequest, LoginResponse};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub auth: AuthConfig,
}

/// Admin credential and token signing material, fixed at process start.
pub struct AuthConfig {
    /// `None` means the deployment never configured an admin; every
    /// login attempt then fails with a configuration error rather than
    /// a credential error.
    pub admin: Option<AdminCredential>,
    pub jwt_secret: String,
}

pub struct AdminCredential {
    pub username: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = req.username.as_deref().unwrap_or("");
    let token = authenticate(&state.auth, username, req.password.as_deref().unwrap_or(""))?;

    info!("Login successful for user: {}", username);
    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}

/// Single-shot, stateless credential check. Issues a signed session
/// token on an exact username match plus password verification.
pub fn authenticate(cfg: &AuthConfig, username: &str, password: &str) -> Result<String, ApiError> {
    let mut errors = Vec::new();
    if username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let admin = cfg.admin.as_ref().ok_or(ApiError::Misconfigured)?;

    if username != admin.username {
        return Err(ApiError::InvalidCredentials);
    }

    // A hash that fails to parse is a deployment problem, not a bad guess.
    let parsed = PasswordHash::new(&admin.password_hash).map_err(|_| ApiError::Misconfigured)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::InvalidCredentials)?;

    create_token(&cfg.jwt_secret, username)
}

/// Hash a plaintext admin password with Argon2id and a fresh salt.
/// Used at startup when the deployment only provides the plaintext.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

fn create_token(secret: &str, username: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: username.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(24)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("Token signing failed: {}", e)))
}
