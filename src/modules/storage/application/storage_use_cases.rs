use std::sync::Arc;

use crate::storage::application::ports::incoming::use_cases::{
    BrowseFolderUseCase, CreateFolderUseCase, DeleteFolderUseCase, DeleteObjectUseCase,
    InitUploadUseCase,
};

#[derive(Clone)]
pub struct StorageUseCases {
    pub browse: Arc<dyn BrowseFolderUseCase + Send + Sync>,
    pub create_folder: Arc<dyn CreateFolderUseCase + Send + Sync>,
    pub delete_folder: Arc<dyn DeleteFolderUseCase + Send + Sync>,
    pub delete_object: Arc<dyn DeleteObjectUseCase + Send + Sync>,
    pub init_upload: Arc<dyn InitUploadUseCase + Send + Sync>,
}
