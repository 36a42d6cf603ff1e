use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::storage::application::ports::incoming::use_cases::BrowseFolderError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListFolderQuery {
    pub path: String,
    pub limit: Option<usize>,
}

#[get("/api/admin/storage/folders")]
pub async fn list_folder_handler(
    _admin: AdminUser,
    query: web::Query<ListFolderQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data.storage.browse.execute(&query.path, query.limit).await {
        Ok(listing) => ApiResponse::success(listing),

        Err(BrowseFolderError::InvalidPath(msg)) => {
            ApiResponse::bad_request("INVALID_PATH", &msg)
        }

        Err(BrowseFolderError::StoreFailed(msg)) => {
            error!("Folder listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
