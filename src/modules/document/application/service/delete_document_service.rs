use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::document::application::ports::incoming::use_cases::{
    DeleteDocumentError, DeleteDocumentUseCase,
};
use crate::document::application::ports::outgoing::document_repository::{
    DocumentRepository, DocumentRepositoryError,
};
use crate::storage::application::domain::location::is_bucket_relative;
use crate::storage::application::ports::outgoing::object_store::ObjectStore;
use uuid::Uuid;

/// Deletes the row first, then the backing object. Object removal is
/// best-effort: a stale key must not block removing the row, so failures
/// are logged and swallowed.
pub struct DeleteDocumentService<R>
where
    R: DocumentRepository,
{
    repository: R,
    store: Arc<dyn ObjectStore>,
}

impl<R> DeleteDocumentService<R>
where
    R: DocumentRepository,
{
    pub fn new(repository: R, store: Arc<dyn ObjectStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> DeleteDocumentUseCase for DeleteDocumentService<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteDocumentError> {
        let record = match self.repository.find(id).await {
            Ok(record) => record,
            Err(DocumentRepositoryError::NotFound) => return Err(DeleteDocumentError::NotFound),
            Err(e) => return Err(DeleteDocumentError::DeleteFailed(e.to_string())),
        };

        match self.repository.delete(id).await {
            Ok(()) => {}
            Err(DocumentRepositoryError::NotFound) => return Err(DeleteDocumentError::NotFound),
            Err(e) => return Err(DeleteDocumentError::DeleteFailed(e.to_string())),
        }

        if is_bucket_relative(&record.location) {
            if let Err(e) = self.store.delete(&record.location).await {
                warn!(key = %record.location, "document object cleanup failed: {}", e);
            }
        }

        Ok(())
    }
}
