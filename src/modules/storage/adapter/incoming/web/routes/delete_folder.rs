use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::storage::application::ports::incoming::use_cases::DeleteFolderError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteFolderQuery {
    pub path: String,
}

#[derive(Serialize)]
struct DeletedFolder {
    removed: u32,
}

#[delete("/api/admin/storage/folders")]
pub async fn delete_folder_handler(
    _admin: AdminUser,
    query: web::Query<DeleteFolderQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data.storage.delete_folder.execute(&query.path).await {
        Ok(removed) => ApiResponse::success(DeletedFolder { removed }),

        Err(DeleteFolderError::InvalidPath(msg)) => {
            ApiResponse::bad_request("INVALID_PATH", &msg)
        }

        Err(DeleteFolderError::StoreFailed(msg)) => {
            error!("Recursive folder delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
