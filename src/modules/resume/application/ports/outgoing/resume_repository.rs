use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct EducationRecord {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub summary: String,
    pub start_date: NaiveDate,
    /// None = current position.
    pub end_date: Option<NaiveDate>,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct CertificationRecord {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
    pub order_index: i32,
}

//
// ──────────────────────────────────────────────────────────
// Drafts (order_index assigned by position on replace)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct ExperienceDraft {
    pub company: String,
    pub title: String,
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// One port for the three résumé tables; each side is an independent list
/// with the same ordered bulk-replace semantics.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn list_education(&self) -> Result<Vec<EducationRecord>, ResumeRepositoryError>;
    async fn replace_education(
        &self,
        drafts: Vec<EducationDraft>,
    ) -> Result<Vec<EducationRecord>, ResumeRepositoryError>;

    async fn list_experience(&self) -> Result<Vec<ExperienceRecord>, ResumeRepositoryError>;
    async fn replace_experience(
        &self,
        drafts: Vec<ExperienceDraft>,
    ) -> Result<Vec<ExperienceRecord>, ResumeRepositoryError>;

    async fn list_certifications(&self)
        -> Result<Vec<CertificationRecord>, ResumeRepositoryError>;
    async fn replace_certifications(
        &self,
        drafts: Vec<CertificationDraft>,
    ) -> Result<Vec<CertificationRecord>, ResumeRepositoryError>;
}
