use async_trait::async_trait;

use crate::storage::application::domain::folder::ObjectKey;
use crate::storage::application::ports::incoming::use_cases::{
    DeleteObjectError, DeleteObjectUseCase,
};
use crate::storage::application::ports::outgoing::object_store::{ObjectStore, ObjectStoreError};

pub struct DeleteObjectService<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> DeleteObjectService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DeleteObjectUseCase for DeleteObjectService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(&self, key: &str) -> Result<(), DeleteObjectError> {
        let key = ObjectKey::parse(key).map_err(|e| DeleteObjectError::InvalidKey(e.to_string()))?;

        match self.store.delete(key.as_str()).await {
            Ok(()) => Ok(()),
            Err(ObjectStoreError::NotFound) => Err(DeleteObjectError::NotFound),
            Err(e) => Err(DeleteObjectError::StoreFailed(e.to_string())),
        }
    }
}
