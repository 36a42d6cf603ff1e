use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::resume::application::ports::incoming::use_cases::SaveResumeSectionError;
use crate::resume::application::ports::outgoing::resume_repository::EducationDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct EducationDto {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

#[put("/api/admin/education")]
pub async fn save_education_handler(
    _admin: AdminUser,
    req: web::Json<Vec<EducationDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let drafts = req
        .into_inner()
        .into_iter()
        .map(|e| EducationDraft {
            institution: e.institution,
            degree: e.degree,
            field: e.field,
            start_year: e.start_year,
            end_year: e.end_year,
        })
        .collect();

    match data.resume.save_education.execute(drafts).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveResumeSectionError::SaveFailed(msg)) => {
            error!("Education bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
