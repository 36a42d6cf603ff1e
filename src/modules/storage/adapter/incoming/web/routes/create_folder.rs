use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::storage::application::ports::incoming::use_cases::CreateFolderError;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateFolderRequest {
    pub path: String,
}

#[derive(Serialize)]
struct CreatedFolder {
    path: String,
}

#[post("/api/admin/storage/folders")]
pub async fn create_folder_handler(
    _admin: AdminUser,
    req: web::Json<CreateFolderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.storage.create_folder.execute(&req.path).await {
        Ok(()) => ApiResponse::created(CreatedFolder { path: req.path }),

        Err(CreateFolderError::InvalidPath(msg)) => {
            ApiResponse::bad_request("INVALID_PATH", &msg)
        }

        Err(CreateFolderError::StoreFailed(msg)) => {
            error!("Folder creation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
