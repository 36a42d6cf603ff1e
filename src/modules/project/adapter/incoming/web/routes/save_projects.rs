use actix_web::{put, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::adapter::incoming::web::routes::ProjectRequestDto;
use crate::project::application::ports::incoming::use_cases::SaveProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Bulk save: the body carries the whole list in display order and the
/// table is replaced to match.
#[put("/api/admin/projects")]
pub async fn save_projects_handler(
    _admin: AdminUser,
    req: web::Json<Vec<ProjectRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inputs = req.into_inner().into_iter().map(Into::into).collect();

    match data.project.save_all.execute(inputs).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveProjectsError::SaveFailed(msg)) => {
            error!("Project bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
