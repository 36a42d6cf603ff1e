use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    GetSessionError, GetSessionUseCase, SessionUser,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::token_revocation::TokenRevocationList;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::service::token_digest;

/// Resolves the caller's session. This is the one read path that consults
/// the revocation list, so a logged-out token stops answering here even
/// though its signature is still valid.
pub struct GetSessionService<Q, R>
where
    Q: UserQuery,
    R: TokenRevocationList,
{
    query: Q,
    revocations: R,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q, R> GetSessionService<Q, R>
where
    Q: UserQuery,
    R: TokenRevocationList,
{
    pub fn new(query: Q, revocations: R, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            revocations,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> GetSessionUseCase for GetSessionService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: TokenRevocationList + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<SessionUser, GetSessionError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(|_| GetSessionError::TokenRevoked)?;

        let revoked = self
            .revocations
            .is_revoked(&token_digest(token))
            .await
            .map_err(|e| GetSessionError::Infrastructure(e.to_string()))?;

        if revoked {
            return Err(GetSessionError::TokenRevoked);
        }

        let account = match self.query.find_by_id(claims.sub).await {
            Ok(account) => account,
            Err(UserQueryError::NotFound) => return Err(GetSessionError::UserGone),
            Err(UserQueryError::DatabaseError(msg)) => {
                return Err(GetSessionError::Infrastructure(msg));
            }
        };

        Ok(SessionUser {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
        })
    }
}
