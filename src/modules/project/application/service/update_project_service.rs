use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::ports::incoming::use_cases::{
    ProjectInput, ProjectView, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::project::application::service::{input_to_draft, record_to_view};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> UpdateProjectService<R>
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
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        input: ProjectInput,
    ) -> Result<ProjectView, UpdateProjectError> {
        let draft = input_to_draft(input, &self.public_base_url);

        match self.repository.update(id, draft).await {
            Ok(record) => Ok(record_to_view(record, &self.public_base_url)),
            Err(ProjectRepositoryError::NotFound) => Err(UpdateProjectError::NotFound),
            Err(e) => Err(UpdateProjectError::SaveFailed(e.to_string())),
        }
    }
}
