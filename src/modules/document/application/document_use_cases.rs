use std::sync::Arc;

use crate::document::application::ports::incoming::use_cases::{
    DeleteDocumentUseCase, GetDocumentsUseCase, SaveDocumentsUseCase,
};

#[derive(Clone)]
pub struct DocumentUseCases {
    pub get: Arc<dyn GetDocumentsUseCase + Send + Sync>,
    pub save: Arc<dyn SaveDocumentsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteDocumentUseCase + Send + Sync>,
}
