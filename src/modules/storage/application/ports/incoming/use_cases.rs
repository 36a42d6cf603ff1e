use async_trait::async_trait;

use crate::storage::application::domain::folder::FolderListing;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct InitUploadRequest {
    pub folder: String,
    pub file_name: String,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct InitUploadOutcome {
    pub key: String,
    /// Signed PUT URL the client uploads to directly.
    pub upload_url: String,
    /// Where the object will be readable once uploaded.
    pub public_url: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseFolderError {
    #[error("Invalid folder path: {0}")]
    InvalidPath(String),

    #[error("Storage error: {0}")]
    StoreFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateFolderError {
    #[error("Invalid folder path: {0}")]
    InvalidPath(String),

    #[error("Storage error: {0}")]
    StoreFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteFolderError {
    #[error("Invalid folder path: {0}")]
    InvalidPath(String),

    #[error("Storage error: {0}")]
    StoreFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteObjectError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Object not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StoreFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InitUploadError {
    #[error("Invalid upload target: {0}")]
    InvalidTarget(String),

    #[error("Storage error: {0}")]
    StoreFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BrowseFolderUseCase: Send + Sync {
    async fn execute(
        &self,
        path: &str,
        limit: Option<usize>,
    ) -> Result<FolderListing, BrowseFolderError>;
}

#[async_trait]
pub trait CreateFolderUseCase: Send + Sync {
    async fn execute(&self, path: &str) -> Result<(), CreateFolderError>;
}

#[async_trait]
pub trait DeleteFolderUseCase: Send + Sync {
    /// Returns the number of objects removed.
    async fn execute(&self, path: &str) -> Result<u32, DeleteFolderError>;
}

#[async_trait]
pub trait DeleteObjectUseCase: Send + Sync {
    async fn execute(&self, key: &str) -> Result<(), DeleteObjectError>;
}

#[async_trait]
pub trait InitUploadUseCase: Send + Sync {
    async fn execute(&self, request: InitUploadRequest)
        -> Result<InitUploadOutcome, InitUploadError>;
}
