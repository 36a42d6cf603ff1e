use async_trait::async_trait;

use crate::gallery::application::ports::incoming::use_cases::{
    GalleryItemInput, GalleryItemView, SaveGalleryError, SaveGalleryUseCase,
};
use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryItemDraft, GalleryRepository,
};
use crate::gallery::application::service::record_to_view;
use crate::storage::application::domain::location::normalize_location;

pub struct SaveGalleryService<R>
where
    R: GalleryRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> SaveGalleryService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R, public_base_url: String) -> Self {
        Self {
            repository,
            public_base_url,
        }
    }
}

#[async_trait]
impl<R> SaveGalleryUseCase for SaveGalleryService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(
        &self,
        inputs: Vec<GalleryItemInput>,
    ) -> Result<Vec<GalleryItemView>, SaveGalleryError> {
        let mut drafts = Vec::with_capacity(inputs.len());

        for input in inputs {
            let location = normalize_location(&input.location, &self.public_base_url);
            if location.is_empty() {
                return Err(SaveGalleryError::EmptyLocation(input.title));
            }

            drafts.push(GalleryItemDraft {
                title: input.title.trim().to_string(),
                category: input.category.trim().to_string(),
                location,
            });
        }

        let records = self
            .repository
            .replace_all(drafts)
            .await
            .map_err(|e| SaveGalleryError::SaveFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}
