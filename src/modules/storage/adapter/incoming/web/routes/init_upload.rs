use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::storage::application::ports::incoming::use_cases::{
    InitUploadError, InitUploadRequest,
};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitUploadRequestDto {
    pub folder: String,
    pub file_name: String,
    pub content_type: String,
}

#[derive(Serialize)]
struct InitUploadResponse {
    key: String,
    upload_url: String,
    public_url: String,
}

#[post("/api/admin/storage/uploads")]
pub async fn init_upload_handler(
    _admin: AdminUser,
    req: web::Json<InitUploadRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = InitUploadRequest {
        folder: req.folder,
        file_name: req.file_name,
        content_type: req.content_type,
    };

    match data.storage.init_upload.execute(request).await {
        Ok(outcome) => ApiResponse::created(InitUploadResponse {
            key: outcome.key,
            upload_url: outcome.upload_url,
            public_url: outcome.public_url,
        }),

        Err(InitUploadError::InvalidTarget(msg)) => {
            ApiResponse::bad_request("INVALID_UPLOAD_TARGET", &msg)
        }

        Err(InitUploadError::StoreFailed(msg)) => {
            error!("Upload URL signing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
