use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserAccount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-side port over the users table. Lookups never expose whether the
/// email or the password was wrong; the login service collapses both.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<UserAccount, UserQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<UserAccount, UserQueryError>;
}
