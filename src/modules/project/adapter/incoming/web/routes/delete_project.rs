use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::DeleteFailed(msg)) => {
            error!("Project delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
