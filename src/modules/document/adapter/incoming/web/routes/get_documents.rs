use actix_web::{get, web, Responder};
use tracing::error;

use crate::document::application::ports::incoming::use_cases::GetDocumentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public document list with ready-to-use URLs.
#[get("/api/documents")]
pub async fn get_documents_handler(data: web::Data<AppState>) -> impl Responder {
    match data.document.get.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(GetDocumentsError::QueryFailed(msg)) => {
            error!("Document listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
