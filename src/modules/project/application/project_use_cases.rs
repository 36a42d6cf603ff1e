use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, SaveProjectsUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub save_all: Arc<dyn SaveProjectsUseCase + Send + Sync>,
}
