use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming project fields, locations not yet normalized.
#[derive(Debug, Clone)]
pub struct ProjectInput {
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
pub enum ListProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveProjectsError {
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectView>, ListProjectsError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, input: ProjectInput) -> Result<ProjectView, CreateProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        input: ProjectInput,
    ) -> Result<ProjectView, UpdateProjectError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}

#[async_trait]
pub trait SaveProjectsUseCase: Send + Sync {
    /// Replaces the whole list; response order is the new display order.
    async fn execute(&self, inputs: Vec<ProjectInput>)
        -> Result<Vec<ProjectView>, SaveProjectsError>;
}
