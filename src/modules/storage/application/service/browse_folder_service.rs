use async_trait::async_trait;

use crate::storage::application::domain::folder::{clamp_limit, synthesize_listing, FolderPath};
use crate::storage::application::domain::folder::FolderListing;
use crate::storage::application::ports::incoming::use_cases::{
    BrowseFolderError, BrowseFolderUseCase,
};
use crate::storage::application::ports::outgoing::object_store::ObjectStore;

/// Lists one virtual folder: a single delimited listing call, prefixes
/// synthesized into folder entries, objects into file entries.
pub struct BrowseFolderService<S>
where
    S: ObjectStore,
{
    store: S,
    public_base_url: String,
}

impl<S> BrowseFolderService<S>
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
impl<S> BrowseFolderUseCase for BrowseFolderService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(
        &self,
        path: &str,
        limit: Option<usize>,
    ) -> Result<FolderListing, BrowseFolderError> {
        let path =
            FolderPath::parse(path).map_err(|e| BrowseFolderError::InvalidPath(e.to_string()))?;

        let limit = clamp_limit(limit) as i32;

        let chunk = self
            .store
            .list(&path.prefix(), Some("/"), limit)
            .await
            .map_err(|e| BrowseFolderError::StoreFailed(e.to_string()))?;

        let objects: Vec<(String, i64)> = chunk
            .objects
            .into_iter()
            .map(|o| (o.key, o.size))
            .collect();

        Ok(synthesize_listing(
            &path,
            &objects,
            &chunk.prefixes,
            chunk.truncated,
            &self.public_base_url,
        ))
    }
}
