use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::adapter::incoming::web::routes::ProjectRequestDto;
use crate::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProjectRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .project
        .update
        .execute(id, req.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::SaveFailed(msg)) => {
            error!("Project update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
