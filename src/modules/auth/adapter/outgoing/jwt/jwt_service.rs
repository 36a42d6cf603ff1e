use chrono::{TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::{
    AccessClaims, TokenError, TokenProvider,
};

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: Uuid,
    role: String,
    token_type: String,
    iss: String,
    iat: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id,
            role: role.as_str().to_string(),
            token_type: "access".to_string(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::seconds(self.config.access_token_expiry)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_key.as_bytes()),
        )
        .map_err(|e| TokenError::Generation(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &validation,
        )
        .map_err(|_| TokenError::Invalid)?;

        let expires_at = Utc
            .timestamp_opt(data.claims.exp, 0)
            .single()
            .ok_or(TokenError::Invalid)?;

        Ok(AccessClaims {
            sub: data.claims.sub,
            role: Role::parse(&data.claims.role),
            token_type: data.claims.token_type,
            expires_at,
        })
    }
}
