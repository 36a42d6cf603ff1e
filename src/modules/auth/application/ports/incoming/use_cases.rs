use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: SessionUser,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are indistinguishable on purpose.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token is invalid or expired")]
    InvalidToken,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSessionError {
    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("User no longer exists")]
    UserGone,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutcome, LoginError>;
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    /// Takes the raw bearer token so its digest can be revoked until expiry.
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

#[async_trait]
pub trait GetSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<SessionUser, GetSessionError>;
}
