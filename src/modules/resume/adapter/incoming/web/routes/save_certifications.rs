use actix_web::{put, web, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::resume::application::ports::incoming::use_cases::SaveResumeSectionError;
use crate::resume::application::ports::outgoing::resume_repository::CertificationDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CertificationDto {
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
}

#[put("/api/admin/certifications")]
pub async fn save_certifications_handler(
    _admin: AdminUser,
    req: web::Json<Vec<CertificationDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let drafts = req
        .into_inner()
        .into_iter()
        .map(|c| CertificationDraft {
            name: c.name,
            issuer: c.issuer,
            issued_on: c.issued_on,
            credential_url: c.credential_url,
        })
        .collect();

    match data.resume.save_certifications.execute(drafts).await {
        Ok(views) => ApiResponse::success(views),

        Err(SaveResumeSectionError::SaveFailed(msg)) => {
            error!("Certification bulk save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
