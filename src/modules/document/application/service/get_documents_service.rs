use async_trait::async_trait;

use crate::document::application::ports::incoming::use_cases::{
    DocumentView, GetDocumentsError, GetDocumentsUseCase,
};
use crate::document::application::ports::outgoing::document_repository::DocumentRepository;
use crate::document::application::service::record_to_view;

pub struct GetDocumentsService<R>
where
    R: DocumentRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> GetDocumentsService<R>
where
    R: DocumentRepository,
{
    pub fn new(repository: R, public_base_url: String) -> Self {
        Self {
            repository,
            public_base_url,
        }
    }
}

#[async_trait]
impl<R> GetDocumentsUseCase for GetDocumentsService<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<DocumentView>, GetDocumentsError> {
        let records = self
            .repository
            .list()
            .await
            .map_err(|e| GetDocumentsError::QueryFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}
