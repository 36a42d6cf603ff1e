use std::sync::Arc;

use crate::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryItemUseCase, GetGalleryUseCase, SaveGalleryUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub get: Arc<dyn GetGalleryUseCase + Send + Sync>,
    pub save: Arc<dyn SaveGalleryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGalleryItemUseCase + Send + Sync>,
}
