use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        match self.repository.delete(id).await {
            Ok(()) => Ok(()),
            Err(ProjectRepositoryError::NotFound) => Err(DeleteProjectError::NotFound),
            Err(e) => Err(DeleteProjectError::DeleteFailed(e.to_string())),
        }
    }
}
