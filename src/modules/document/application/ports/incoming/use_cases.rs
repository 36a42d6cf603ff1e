use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub url: String,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDocumentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveDocumentsError {
    #[error("Document '{0}' has an empty location")]
    EmptyLocation(String),

    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteDocumentError {
    #[error("Document not found")]
    NotFound,

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

#[async_trait]
pub trait GetDocumentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DocumentView>, GetDocumentsError>;
}

#[async_trait]
pub trait SaveDocumentsUseCase: Send + Sync {
    async fn execute(
        &self,
        inputs: Vec<DocumentInput>,
    ) -> Result<Vec<DocumentView>, SaveDocumentsError>;
}

#[async_trait]
pub trait DeleteDocumentUseCase: Send + Sync {
    /// Removes the row; the backing object goes too when the location is a
    /// bucket key (best-effort).
    async fn execute(&self, id: Uuid) -> Result<(), DeleteDocumentError>;
}
