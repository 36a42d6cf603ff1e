use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::storage::application::ports::incoming::use_cases::DeleteObjectError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteObjectQuery {
    pub key: String,
}

#[delete("/api/admin/storage/objects")]
pub async fn delete_object_handler(
    _admin: AdminUser,
    query: web::Query<DeleteObjectQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data.storage.delete_object.execute(&query.key).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteObjectError::InvalidKey(msg)) => ApiResponse::bad_request("INVALID_KEY", &msg),

        Err(DeleteObjectError::NotFound) => {
            ApiResponse::not_found("OBJECT_NOT_FOUND", "Object not found")
        }

        Err(DeleteObjectError::StoreFailed(msg)) => {
            error!("Object delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
