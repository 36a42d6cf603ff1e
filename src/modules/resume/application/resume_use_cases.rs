use std::sync::Arc;

use crate::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, SaveCertificationsUseCase, SaveEducationUseCase, SaveExperienceUseCase,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub get: Arc<dyn GetResumeUseCase + Send + Sync>,
    pub save_education: Arc<dyn SaveEducationUseCase + Send + Sync>,
    pub save_experience: Arc<dyn SaveExperienceUseCase + Send + Sync>,
    pub save_certifications: Arc<dyn SaveCertificationsUseCase + Send + Sync>,
}
