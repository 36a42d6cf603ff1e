use actix_web::{put, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::resume::application::ports::incoming::use_cases::SaveResumeSectionError;
use crate::resume::application::ports::outgoing::resume_repository::ExperienceDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct ExperienceDto {
    pub company: String,
    pub title: String,
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[put("/api/admin/experience")]
pub async fn save_experience_handler(
    _admin: AdminUser,
    req: web::Json<Vec<ExperienceDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let drafts = req
        .into_inner()
        .into_iter()
        .map(|e| ExperienceDraft {
            company: e.company,
            title: e.title,
            summary: e.summary,
            start_date: e.start_date,
            end_date: e.end_date,
        })
        .collect();

    match data.resume.save_experience.execute(drafts).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveResumeSectionError::SaveFailed(msg)) => {
            error!("Experience bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
