use async_trait::async_trait;

use crate::storage::application::domain::folder::FolderPath;
use crate::storage::application::domain::location::public_url;
use crate::storage::application::ports::incoming::use_cases::{
    InitUploadError, InitUploadOutcome, InitUploadRequest, InitUploadUseCase,
};
use crate::storage::application::ports::outgoing::object_store::ObjectStore;

/// Prepares a direct client upload: validates the target, signs a PUT URL,
/// and reports where the object will be publicly readable.
pub struct InitUploadService<S>
where
    S: ObjectStore,
{
    store: S,
    public_base_url: String,
}

impl<S> InitUploadService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S, public_base_url: String) -> Self {
        Self {
            store,
            public_base_url,
        }
    }
}

#[async_trait]
impl<S> InitUploadUseCase for InitUploadService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(
        &self,
        request: InitUploadRequest,
    ) -> Result<InitUploadOutcome, InitUploadError> {
        let folder = FolderPath::parse(&request.folder)
            .map_err(|e| InitUploadError::InvalidTarget(e.to_string()))?;

        let key = folder
            .child_key(request.file_name.trim())
            .map_err(|e| InitUploadError::InvalidTarget(e.to_string()))?;

        let content_type = request.content_type.trim();
        if content_type.is_empty() {
            return Err(InitUploadError::InvalidTarget(
                "content type must not be empty".to_string(),
            ));
        }

        let upload_url = self
            .store
            .signed_upload_url(&key, content_type)
            .await
            .map_err(|e| InitUploadError::StoreFailed(e.to_string()))?;

        Ok(InitUploadOutcome {
            public_url: public_url(&key, &self.public_base_url),
            key,
            upload_url,
        })
    }
}
