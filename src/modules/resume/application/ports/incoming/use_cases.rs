use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::resume::application::ports::outgoing::resume_repository::{
    CertificationDraft, EducationDraft, ExperienceDraft,
};

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationView {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
    pub order_index: i32,
}

/// Everything the public résumé section renders, in one response.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeView {
    pub education: Vec<EducationView>,
    pub experience: Vec<ExperienceView>,
    pub certifications: Vec<CertificationView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResumeError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveResumeSectionError {
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeView, GetResumeError>;
}

#[async_trait]
pub trait SaveEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        drafts: Vec<EducationDraft>,
    ) -> Result<Vec<EducationView>, SaveResumeSectionError>;
}

#[async_trait]
pub trait SaveExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        drafts: Vec<ExperienceDraft>,
    ) -> Result<Vec<ExperienceView>, SaveResumeSectionError>;
}

#[async_trait]
pub trait SaveCertificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        drafts: Vec<CertificationDraft>,
    ) -> Result<Vec<CertificationView>, SaveResumeSectionError>;
}
