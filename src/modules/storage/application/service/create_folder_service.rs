use async_trait::async_trait;

use crate::storage::application::domain::folder::{FolderPath, PLACEHOLDER_OBJECT};
use crate::storage::application::ports::incoming::use_cases::{
    CreateFolderError, CreateFolderUseCase,
};
use crate::storage::application::ports::outgoing::object_store::ObjectStore;

/// "Creates" a folder in the flat namespace by writing its placeholder
/// object; overwriting an existing placeholder is harmless.
pub struct CreateFolderService<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> CreateFolderService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> CreateFolderUseCase for CreateFolderService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(&self, path: &str) -> Result<(), CreateFolderError> {
        let path =
            FolderPath::parse(path).map_err(|e| CreateFolderError::InvalidPath(e.to_string()))?;

        let placeholder = format!("{}{}", path.prefix(), PLACEHOLDER_OBJECT);

        self.store
            .put_empty(&placeholder)
            .await
            .map_err(|e| CreateFolderError::StoreFailed(e.to_string()))?;

        Ok(())
    }
}
