use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginOutcome, LoginRequest, LoginUseCase, SessionUser,
};
use crate::auth::application::ports::outgoing::password_hasher::PasswordVerifier;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

pub struct LoginService<Q>
where
    Q: UserQuery,
{
    query: Q,
    verifier: Arc<dyn PasswordVerifier>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, verifier: Arc<dyn PasswordVerifier>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUseCase for LoginService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutcome, LoginError> {
        let email = request.email.trim().to_lowercase();

        let account = match self.query.find_by_email(&email).await {
            Ok(account) => account,
            Err(UserQueryError::NotFound) => return Err(LoginError::InvalidCredentials),
            Err(UserQueryError::DatabaseError(msg)) => {
                return Err(LoginError::Infrastructure(msg));
            }
        };

        if !self.verifier.verify(&request.password, &account.password_hash) {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.id, account.role)
            .map_err(|e| LoginError::Infrastructure(e.to_string()))?;

        Ok(LoginOutcome {
            access_token,
            user: SessionUser {
                id: account.id,
                name: account.name,
                email: account.email,
                role: account.role,
            },
        })
    }
}
