use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct GalleryItemRecord {
    pub id: Uuid,
    pub title: String,
    /// First-level folder under `gallery/` the image lives in.
    pub category: String,
    /// Bucket key or full URL, as stored.
    pub location: String,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct GalleryItemDraft {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GalleryRepositoryError {
    #[error("Gallery item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Ordered; `category = None` returns everything.
    async fn list(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError>;

    async fn replace_all(
        &self,
        drafts: Vec<GalleryItemDraft>,
    ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<GalleryItemRecord, GalleryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), GalleryRepositoryError>;
}
