use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::AppState;

/// Public skills page data: categories with their skills, both ordered.
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Skill listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
