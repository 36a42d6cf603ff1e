use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::UpdateProfileError;
use crate::profile::application::ports::outgoing::profile_repository::UpsertProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateProfileRequest {
    pub headline: String,
    pub bio: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub image_location: Option<String>,
    #[serde(default)]
    pub social_links: serde_json::Value,
}

#[put("/api/admin/profile")]
pub async fn update_profile_handler(
    admin: AdminUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let upsert = UpsertProfileData {
        headline: req.headline,
        bio: req.bio,
        location: req.location,
        contact_email: req.contact_email,
        skills: req.skills,
        image_location: req.image_location,
        social_links: req.social_links,
    };

    match data
        .profile
        .update
        .execute(UserId::from(admin.user_id), upsert)
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(UpdateProfileError::SaveFailed(msg)) => {
            error!("Profile save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
