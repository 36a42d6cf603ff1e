use async_trait::async_trait;

use crate::document::application::ports::incoming::use_cases::{
    DocumentInput, DocumentView, SaveDocumentsError, SaveDocumentsUseCase,
};
use crate::document::application::ports::outgoing::document_repository::{
    DocumentDraft, DocumentRepository,
};
use crate::document::application::service::record_to_view;
use crate::storage::application::domain::location::normalize_location;

pub struct SaveDocumentsService<R>
where
    R: DocumentRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> SaveDocumentsService<R>
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
impl<R> SaveDocumentsUseCase for SaveDocumentsService<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(
        &self,
        inputs: Vec<DocumentInput>,
    ) -> Result<Vec<DocumentView>, SaveDocumentsError> {
        let mut drafts = Vec::with_capacity(inputs.len());

        for input in inputs {
            let location = normalize_location(&input.location, &self.public_base_url);
            if location.is_empty() {
                return Err(SaveDocumentsError::EmptyLocation(input.title));
            }

            drafts.push(DocumentDraft {
                title: input.title.trim().to_string(),
                category: input.category.trim().to_string(),
                location,
            });
        }

        let records = self
            .repository
            .replace_all(drafts)
            .await
            .map_err(|e| SaveDocumentsError::SaveFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}
