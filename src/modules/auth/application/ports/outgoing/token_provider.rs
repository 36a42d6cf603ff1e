use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

/// Claims carried by a verified access token.
#[derive(Debug, Clone)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub role: Role,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token is invalid or expired")]
    Invalid,

    #[error("Token generation failed: {0}")]
    Generation(String),
}

/// Issues and verifies the JWTs that guard the admin API.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
}
