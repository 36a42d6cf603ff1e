use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryItemError, DeleteGalleryItemUseCase,
};
use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryRepository, GalleryRepositoryError,
};
use crate::storage::application::domain::location::is_bucket_relative;
use crate::storage::application::ports::outgoing::object_store::ObjectStore;

/// Same contract as document deletion: row first, then best-effort object
/// cleanup for bucket-relative locations.
pub struct DeleteGalleryItemService<R>
where
    R: GalleryRepository,
{
    repository: R,
    store: Arc<dyn ObjectStore>,
}

impl<R> DeleteGalleryItemService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R, store: Arc<dyn ObjectStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> DeleteGalleryItemUseCase for DeleteGalleryItemService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteGalleryItemError> {
        let record = match self.repository.find(id).await {
            Ok(record) => record,
            Err(GalleryRepositoryError::NotFound) => {
                return Err(DeleteGalleryItemError::NotFound)
            }
            Err(e) => return Err(DeleteGalleryItemError::DeleteFailed(e.to_string())),
        };

        match self.repository.delete(id).await {
            Ok(()) => {}
            Err(GalleryRepositoryError::NotFound) => {
                return Err(DeleteGalleryItemError::NotFound)
            }
            Err(e) => return Err(DeleteGalleryItemError::DeleteFailed(e.to_string())),
        }

        if is_bucket_relative(&record.location) {
            if let Err(e) = self.store.delete(&record.location).await {
                warn!(key = %record.location, "gallery object cleanup failed: {}", e);
            }
        }

        Ok(())
    }
}
