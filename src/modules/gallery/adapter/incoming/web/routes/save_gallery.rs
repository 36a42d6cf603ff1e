use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::gallery::application::ports::incoming::use_cases::{
    GalleryItemInput, SaveGalleryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct GalleryItemDto {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[put("/api/admin/gallery")]
pub async fn save_gallery_handler(
    _admin: AdminUser,
    req: web::Json<Vec<GalleryItemDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inputs = req
        .into_inner()
        .into_iter()
        .map(|g| GalleryItemInput {
            title: g.title,
            category: g.category,
            location: g.location,
        })
        .collect();

    match data.gallery.save.execute(inputs).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveGalleryError::EmptyLocation(title)) => ApiResponse::bad_request(
            "EMPTY_LOCATION",
            &format!("Gallery item '{}' has an empty location", title),
        ),

        Err(SaveGalleryError::SaveFailed(msg)) => {
            error!("Gallery bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
