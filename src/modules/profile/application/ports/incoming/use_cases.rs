use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::profile_repository::UpsertProfileData;

/// Profile as served to clients: the stored image location already
/// expanded to a public URL.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub headline: String,
    pub bio: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub skills: Vec<String>,
    pub image_url: Option<String>,
    pub social_links: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileView, GetProfileError>;
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        data: UpsertProfileData,
    ) -> Result<ProfileView, UpdateProfileError>;
}
