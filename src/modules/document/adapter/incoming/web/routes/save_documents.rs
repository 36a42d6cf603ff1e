use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::document::application::ports::incoming::use_cases::{
    DocumentInput, SaveDocumentsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct DocumentDto {
    pub title: String,
    pub category: String,
    pub location: String,
}

#[put("/api/admin/documents")]
pub async fn save_documents_handler(
    _admin: AdminUser,
    req: web::Json<Vec<DocumentDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inputs = req
        .into_inner()
        .into_iter()
        .map(|d| DocumentInput {
            title: d.title,
            category: d.category,
            location: d.location,
        })
        .collect();

    match data.document.save.execute(inputs).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveDocumentsError::EmptyLocation(title)) => ApiResponse::bad_request(
            "EMPTY_LOCATION",
            &format!("Document '{}' has an empty location", title),
        ),

        Err(SaveDocumentsError::SaveFailed(msg)) => {
            error!("Document bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
