use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase, ProjectView,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::project::application::service::record_to_view;

pub struct ListProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> ListProjectsService<R>
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
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectView>, ListProjectsError> {
        let records = self
            .repository
            .list()
            .await
            .map_err(|e| ListProjectsError::QueryFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}
