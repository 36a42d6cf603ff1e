use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::gallery::application::ports::incoming::use_cases::DeleteGalleryItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/gallery/{id}")]
pub async fn delete_gallery_item_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.gallery.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteGalleryItemError::NotFound) => {
            ApiResponse::not_found("GALLERY_ITEM_NOT_FOUND", "Gallery item not found")
        }

        Err(DeleteGalleryItemError::DeleteFailed(msg)) => {
            error!("Gallery item delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
