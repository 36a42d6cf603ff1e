use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::gallery::application::ports::incoming::use_cases::GetGalleryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

/// Public gallery, optionally narrowed to one category folder.
#[get("/api/gallery")]
pub async fn get_gallery_handler(
    query: web::Query<GalleryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.gallery.get.execute(query.into_inner().category).await {
        Ok(views) => ApiResponse::success(views),

        Err(GetGalleryError::QueryFailed(msg)) => {
            error!("Gallery listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
