use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    ProjectInput, ProjectView, SaveProjectsError, SaveProjectsUseCase,
};
use crate::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::project::application::service::{input_to_draft, record_to_view};

/// Bulk save from the admin dashboard: the request body carries the entire
/// list in display order and the table is replaced to match.
pub struct SaveProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
    public_base_url: String,
}

impl<R> SaveProjectsService<R>
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
impl<R> SaveProjectsUseCase for SaveProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        inputs: Vec<ProjectInput>,
    ) -> Result<Vec<ProjectView>, SaveProjectsError> {
        let drafts = inputs
            .into_iter()
            .map(|input| input_to_draft(input, &self.public_base_url))
            .collect();

        let records = self
            .repository
            .replace_all(drafts)
            .await
            .map_err(|e| SaveProjectsError::SaveFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|r| record_to_view(r, &self.public_base_url))
            .collect())
    }
}
