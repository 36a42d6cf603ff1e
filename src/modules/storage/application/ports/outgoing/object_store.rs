use async_trait::async_trait;

/// One object returned by a listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
}

/// A single listing page. `truncated` means the bucket holds more entries
/// under the prefix than the page could carry; callers surface that rather
/// than looping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListChunk {
    pub objects: Vec<ObjectSummary>,
    pub prefixes: Vec<String>,
    pub truncated: bool,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Object not found")]
    NotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

/// Port over the flat key namespace of the media bucket.
///
/// The virtual folder tree lives entirely in the application layer; this
/// port only speaks prefixes, delimiters and keys.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// One listing round trip. With `delimiter = Some("/")` the store
    /// collapses nested keys into prefixes; with `None` it returns every
    /// key under the prefix (used by recursive delete).
    async fn list(
        &self,
        prefix: &str,
        delimiter: Option<&str>,
        max_results: i32,
    ) -> Result<ListChunk, ObjectStoreError>;

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError>;

    /// Writes a zero-byte object (folder placeholder).
    async fn put_empty(&self, key: &str) -> Result<(), ObjectStoreError>;

    /// Signed PUT URL for a direct client upload.
    async fn signed_upload_url(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<String, ObjectStoreError>;
}
