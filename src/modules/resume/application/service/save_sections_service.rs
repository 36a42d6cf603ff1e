use async_trait::async_trait;
use std::sync::Arc;

use crate::resume::application::ports::incoming::use_cases::{
    CertificationView, EducationView, ExperienceView, SaveCertificationsUseCase,
    SaveEducationUseCase, SaveExperienceUseCase, SaveResumeSectionError,
};
use crate::resume::application::ports::outgoing::resume_repository::{
    CertificationDraft, EducationDraft, ExperienceDraft, ResumeRepository,
};
use crate::resume::application::service::{certification_view, education_view, experience_view};

/// One service per section would be three copies of the same ten lines;
/// the sections share a repository handle instead.
pub struct SaveResumeSectionsService {
    repository: Arc<dyn ResumeRepository>,
}

impl SaveResumeSectionsService {
    pub fn new(repository: Arc<dyn ResumeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SaveEducationUseCase for SaveResumeSectionsService {
    async fn execute(
        &self,
        drafts: Vec<EducationDraft>,
    ) -> Result<Vec<EducationView>, SaveResumeSectionError> {
        let records = self
            .repository
            .replace_education(drafts)
            .await
            .map_err(|e| SaveResumeSectionError::SaveFailed(e.to_string()))?;

        Ok(records.into_iter().map(education_view).collect())
    }
}

#[async_trait]
impl SaveExperienceUseCase for SaveResumeSectionsService {
    async fn execute(
        &self,
        drafts: Vec<ExperienceDraft>,
    ) -> Result<Vec<ExperienceView>, SaveResumeSectionError> {
        let records = self
            .repository
            .replace_experience(drafts)
            .await
            .map_err(|e| SaveResumeSectionError::SaveFailed(e.to_string()))?;

        Ok(records.into_iter().map(experience_view).collect())
    }
}

#[async_trait]
impl SaveCertificationsUseCase for SaveResumeSectionsService {
    async fn execute(
        &self,
        drafts: Vec<CertificationDraft>,
    ) -> Result<Vec<CertificationView>, SaveResumeSectionError> {
        let records = self
            .repository
            .replace_certifications(drafts)
            .await
            .map_err(|e| SaveResumeSectionError::SaveFailed(e.to_string()))?;

        Ok(records.into_iter().map(certification_view).collect())
    }
}
