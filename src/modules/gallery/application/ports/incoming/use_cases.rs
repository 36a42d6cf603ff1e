use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItemView {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub url: String,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct GalleryItemInput {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGalleryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveGalleryError {
    #[error("Gallery item '{0}' has an empty location")]
    EmptyLocation(String),

    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGalleryItemError {
    #[error("Gallery item not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

#[async_trait]
pub trait GetGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        category: Option<String>,
    ) -> Result<Vec<GalleryItemView>, GetGalleryError>;
}

#[async_trait]
pub trait SaveGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        inputs: Vec<GalleryItemInput>,
    ) -> Result<Vec<GalleryItemView>, SaveGalleryError>;
}

#[async_trait]
pub trait DeleteGalleryItemUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteGalleryItemError>;
}
