use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_location: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values for a project row; order_index is owned by the repository
/// (append position on create, list position on bulk replace).
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_location: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
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
pub trait ProjectRepository: Send + Sync {
    /// All projects, `order_index` ascending.
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    /// Appends at the end of the display order.
    async fn create(&self, draft: ProjectDraft) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    /// Bulk save: delete-all-then-reinsert in the given order inside one
    /// transaction, order_index = position.
    async fn replace_all(
        &self,
        drafts: Vec<ProjectDraft>,
    ) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;
}
