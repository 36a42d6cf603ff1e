use async_trait::async_trait;

use crate::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase, SkillCategoryView,
};
use crate::skill::application::ports::outgoing::skill_repository::SkillRepository;
use crate::skill::application::service::record_to_view;

pub struct GetSkillsService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> GetSkillsService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsUseCase for GetSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError> {
        let records = self
            .repository
            .fetch_tree()
            .await
            .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))?;

        Ok(records.into_iter().map(record_to_view).collect())
    }
}
