use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub title: String,
    /// First-level folder under `documents/` the file lives in.
    pub category: String,
    /// Bucket key or full URL, as stored.
    pub location: String,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentRepositoryError {
    #[error("Document not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<DocumentRecord>, DocumentRepositoryError>;

    /// Ordered bulk replace in one transaction, order_index = position.
    async fn replace_all(
        &self,
        drafts: Vec<DocumentDraft>,
    ) -> Result<Vec<DocumentRecord>, DocumentRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<DocumentRecord, DocumentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), DocumentRepositoryError>;
}
