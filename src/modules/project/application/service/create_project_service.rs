use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, ProjectInput, ProjectView,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::project::application::service::{input_to_draft, record_to_view};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, public_base_url: String) -> Self {
        Self {
            repository,
            public_base_url,
        }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, input: ProjectInput) -> Result<ProjectView, CreateProjectError> {
        let draft = input_to_draft(input, &self.public_base_url);

        let record = self
            .repository
            .create(draft)
            .await
            .map_err(|e| CreateProjectError::SaveFailed(e.to_string()))?;

        Ok(record_to_view(record, &self.public_base_url))
    }
}
