use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::token_revocation::TokenRevocationList;
use crate::auth::application::service::token_digest;

pub struct LogoutService<R>
where
    R: TokenRevocationList,
{
    revocations: R,
    tokens: Arc<dyn TokenProvider>,
}

impl<R> LogoutService<R>
where
    R: TokenRevocationList,
{
    pub fn new(revocations: R, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            revocations,
            tokens,
        }
    }
}

#[async_trait]
impl<R> LogoutUseCase for LogoutService<R>
where
    R: TokenRevocationList + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        // Entry lives exactly as long as the token would; already-expired
        // tokens need no entry at all.
        let remaining = (claims.expires_at - Utc::now()).num_seconds();
        if remaining <= 0 {
            return Ok(());
        }

        self.revocations
            .revoke(&token_digest(token), remaining as u64)
            .await
            .map_err(|e| LogoutError::Infrastructure(e.to_string()))?;

        Ok(())
    }
}
