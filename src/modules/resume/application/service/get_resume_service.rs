use async_trait::async_trait;

use crate::resume::application::ports::incoming::use_cases::{
    GetResumeError, GetResumeUseCase, ResumeView,
};
use crate::resume::application::ports::outgoing::resume_repository::ResumeRepository;
use crate::resume::application::service::{certification_view, education_view, experience_view};

pub struct GetResumeService<R>
where
    R: ResumeRepository,
{
    repository: R,
}

impl<R> GetResumeService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetResumeUseCase for GetResumeService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ResumeView, GetResumeError> {
        let education = self
            .repository
            .list_education()
            .await
            .map_err(|e| GetResumeError::QueryFailed(e.to_string()))?;

        let experience = self
            .repository
            .list_experience()
            .await
            .map_err(|e| GetResumeError::QueryFailed(e.to_string()))?;

        let certifications = self
            .repository
            .list_certifications()
            .await
            .map_err(|e| GetResumeError::QueryFailed(e.to_string()))?;

        Ok(ResumeView {
            education: education.into_iter().map(education_view).collect(),
            experience: experience.into_iter().map(experience_view).collect(),
            certifications: certifications.into_iter().map(certification_view).collect(),
        })
    }
}
