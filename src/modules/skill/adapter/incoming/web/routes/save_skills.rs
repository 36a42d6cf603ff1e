use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::use_cases::{
    SaveSkillsError, SkillCategoryInput, SkillInput,
};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct SkillDto {
    pub name: String,
    #[serde(default)]
    pub level: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SkillCategoryDto {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
}

#[put("/api/admin/skills")]
pub async fn save_skills_handler(
    _admin: AdminUser,
    req: web::Json<Vec<SkillCategoryDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let inputs = req
        .into_inner()
        .into_iter()
        .map(|c| SkillCategoryInput {
            title: c.title,
            skills: c
                .skills
                .into_iter()
                .map(|s| SkillInput {
                    name: s.name,
                    level: s.level,
                })
                .collect(),
        })
        .collect();

    match data.skill.save.execute(inputs).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveSkillsError::SaveFailed(msg)) => {
            error!("Skill bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
