use actix_web::{get, web, Responder};
use tracing::error;

use crate::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public project list, in display order.
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(ListProjectsError::QueryFailed(msg)) => {
            error!("Project listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
