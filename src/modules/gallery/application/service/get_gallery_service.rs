use async_trait::async_trait;

use crate::gallery::application::ports::incoming::use_cases::{
    GalleryItemView, GetGalleryError, GetGalleryUseCase,
};
use crate::gallery::application::ports::outgoing::gallery_repository::GalleryRepository;
use crate::gallery::application::service::record_to_view;

pub struct GetGalleryService<R>
where
    R: GalleryRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> GetGalleryService<R>
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
impl<R> GetGalleryUseCase for GetGalleryService<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(
        &self,
        category: Option<String>,
    ) -> Result<Vec<GalleryItemView>, GetGalleryError> {
        let category = category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let records = self
            .repository
            .list(category)
            .await
            .map_err(|e| GetGalleryError::QueryFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::gallery::application::ports::outgoing::gallery_repository::{
        GalleryItemDraft, GalleryItemRecord, GalleryRepositoryError,
    };

    struct RecordingRepo {
        last_category: Mutex<Option<Option<String>>>,
    }

    #[async_trait]
    impl GalleryRepository for RecordingRepo {
        async fn list(
            &self,
            category: Option<&str>,
        ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError> {
            *self.last_category.lock().unwrap() = Some(category.map(|c| c.to_string()));
            Ok(vec![GalleryItemRecord {
                id: Uuid::new_v4(),
                title: "Rome".to_string(),
                category: "travel".to_string(),
                location: "gallery/travel/rome.webp".to_string(),
                order_index: 0,
            }])
        }

        async fn replace_all(
            &self,
            _drafts: Vec<GalleryItemDraft>,
        ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError> {
            unimplemented!("not used in GetGalleryService tests")
        }

        async fn find(&self, _id: Uuid) -> Result<GalleryItemRecord, GalleryRepositoryError> {
            unimplemented!("not used in GetGalleryService tests")
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GalleryRepositoryError> {
            unimplemented!("not used in GetGalleryService tests")
        }
    }

    #[tokio::test]
    async fn blank_category_means_no_filter() {
        let service = GetGalleryService::new(
            RecordingRepo {
                last_category: Mutex::new(None),
            },
            "https://cdn.example.com".to_string(),
        );

        let views = service.execute(Some("   ".to_string())).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(
            views[0].url,
            "https://cdn.example.com/gallery/travel/rome.webp"
        );

        let seen = service.repository.last_category.lock().unwrap();
        assert_eq!(seen.as_ref().unwrap(), &None);
    }

    #[tokio::test]
    async fn category_filter_is_forwarded() {
        let service = GetGalleryService::new(
            RecordingRepo {
                last_category: Mutex::new(None),
            },
            "https://cdn.example.com".to_string(),
        );

        let _ = service.execute(Some("travel".to_string())).await.unwrap();

        let seen = service.repository.last_category.lock().unwrap();
        assert_eq!(seen.as_ref().unwrap().as_deref(), Some("travel"));
    }
}
