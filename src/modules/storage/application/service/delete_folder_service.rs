use async_trait::async_trait;
use tracing::warn;

use crate::storage::application::domain::folder::{FolderPath, MAX_LIST_LIMIT};
use crate::storage::application::ports::incoming::use_cases::{
    DeleteFolderError, DeleteFolderUseCase,
};
use crate::storage::application::ports::outgoing::object_store::ObjectStore;

/// Recursive delete by listing: one non-delimited listing capped at the
/// page maximum, then sequential removes. Not atomic, and a folder holding
/// more keys than one page keeps its tail (reported via the warning log) —
/// matching the listing contract of the browser.
pub struct DeleteFolderService<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> DeleteFolderService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DeleteFolderUseCase for DeleteFolderService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(&self, path: &str) -> Result<u32, DeleteFolderError> {
        let path =
            FolderPath::parse(path).map_err(|e| DeleteFolderError::InvalidPath(e.to_string()))?;

        let chunk = self
            .store
            .list(&path.prefix(), None, MAX_LIST_LIMIT as i32)
            .await
            .map_err(|e| DeleteFolderError::StoreFailed(e.to_string()))?;

        if chunk.truncated {
            warn!(
                folder = %path.as_str(),
                "folder holds more than {} keys; delete will leave a tail",
                MAX_LIST_LIMIT
            );
        }

        let mut removed = 0u32;
        for object in chunk.objects {
            self.store
                .delete(&object.key)
                .await
                .map_err(|e| DeleteFolderError::StoreFailed(e.to_string()))?;
            removed += 1;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::storage::application::ports::outgoing::object_store::{
        ListChunk, ObjectStoreError, ObjectSummary,
    };

    struct FakeStore {
        list_result: Result<ListChunk, ObjectStoreError>,
        deleted: Mutex<Vec<String>>,
        fail_delete_on: Option<String>,
    }

    impl FakeStore {
        fn with_keys(keys: &[&str]) -> Self {
            Self {
                list_result: Ok(ListChunk {
                    objects: keys
                        .iter()
                        .map(|k| ObjectSummary {
                            key: k.to_string(),
                            size: 1,
                        })
                        .collect(),
                    prefixes: vec![],
                    truncated: false,
                }),
                deleted: Mutex::new(Vec::new()),
                fail_delete_on: None,
            }
        }
    }

    #[async_trait]
    impl ObjectStore for FakeStore {
        async fn list(
            &self,
            _prefix: &str,
            delimiter: Option<&str>,
            max_results: i32,
        ) -> Result<ListChunk, ObjectStoreError> {
            // Recursive delete must see nested keys, so no delimiter.
            assert!(delimiter.is_none());
            assert_eq!(max_results, MAX_LIST_LIMIT as i32);
            self.list_result.clone()
        }

        async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
            if self.fail_delete_on.as_deref() == Some(key) {
                return Err(ObjectStoreError::Infrastructure("remove failed".to_string()));
            }
            self.deleted.lock().unwrap().push(key.to_string());
            Ok(())
        }

        async fn put_empty(&self, _key: &str) -> Result<(), ObjectStoreError> {
            unimplemented!("not used in DeleteFolderService tests")
        }

        async fn signed_upload_url(
            &self,
            _key: &str,
            _content_type: &str,
        ) -> Result<String, ObjectStoreError> {
            unimplemented!("not used in DeleteFolderService tests")
        }
    }

    #[tokio::test]
    async fn removes_every_listed_key_including_placeholder() {
        let service = DeleteFolderService::new(FakeStore::with_keys(&[
            "rootdocs/old/.keep",
            "rootdocs/old/a.pdf",
            "rootdocs/old/sub/b.pdf",
        ]));

        let removed = service.execute("rootdocs/old").await.unwrap();
        assert_eq!(removed, 3);

        let deleted = service.store.deleted.lock().unwrap();
        assert_eq!(
            deleted.as_slice(),
            [
                "rootdocs/old/.keep",
                "rootdocs/old/a.pdf",
                "rootdocs/old/sub/b.pdf"
            ]
        );
    }

    #[tokio::test]
    async fn empty_folder_removes_nothing() {
        let service = DeleteFolderService::new(FakeStore::with_keys(&[]));
        assert_eq!(service.execute("rootdocs/empty").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_path_is_rejected_before_listing() {
        let service = DeleteFolderService::new(FakeStore::with_keys(&[]));
        let err = service.execute("../../etc").await.unwrap_err();
        assert!(matches!(err, DeleteFolderError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn listing_failure_aborts() {
        let service = DeleteFolderService::new(FakeStore {
            list_result: Err(ObjectStoreError::Infrastructure("listing failed".to_string())),
            deleted: Mutex::new(Vec::new()),
            fail_delete_on: None,
        });

        let err = service.execute("rootdocs/old").await.unwrap_err();
        assert!(matches!(err, DeleteFolderError::StoreFailed(_)));
    }

    #[tokio::test]
    async fn delete_failure_stops_midway() {
        let mut store = FakeStore::with_keys(&["rootdocs/old/a.pdf", "rootdocs/old/b.pdf"]);
        store.fail_delete_on = Some("rootdocs/old/b.pdf".to_string());

        let service = DeleteFolderService::new(store);

        let err = service.execute("rootdocs/old").await.unwrap_err();
        assert!(matches!(err, DeleteFolderError::StoreFailed(_)));

        // First remove landed before the failure: the operation is not atomic.
        let deleted = service.store.deleted.lock().unwrap();
        assert_eq!(deleted.as_slice(), ["rootdocs/old/a.pdf"]);
    }
}
