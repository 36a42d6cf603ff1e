use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub headline: String,
    pub bio: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub skills: Vec<String>,
    /// Bucket key or full URL, as stored.
    pub image_location: Option<String>,
    pub social_links: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-replace payload; the site has a single profile row per owner.
#[derive(Debug, Clone)]
pub struct UpsertProfileData {
    pub headline: String,
    pub bio: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub skills: Vec<String>,
    pub image_location: Option<String>,
    pub social_links: serde_json::Value,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The public site shows one profile: the oldest row wins.
    async fn get_first(&self) -> Result<ProfileRecord, ProfileRepositoryError>;

    async fn upsert(
        &self,
        owner: UserId,
        data: UpsertProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;
}
