use async_trait::async_trait;

use crate::skill::application::ports::incoming::use_cases::{
    SaveSkillsError, SaveSkillsUseCase, SkillCategoryInput, SkillCategoryView,
};
use crate::skill::application::ports::outgoing::skill_repository::{
    SkillCategoryDraft, SkillDraft, SkillRepository,
};
use crate::skill::application::service::record_to_view;

pub struct SaveSkillsService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SaveSkillsService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveSkillsUseCase for SaveSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        inputs: Vec<SkillCategoryInput>,
    ) -> Result<Vec<SkillCategoryView>, SaveSkillsError> {
        let drafts = inputs
            .into_iter()
            .map(|category| SkillCategoryDraft {
                title: category.title.trim().to_string(),
                skills: category
                    .skills
                    .into_iter()
                    .map(|s| SkillDraft {
                        name: s.name.trim().to_string(),
                        // Levels render as percentages; out-of-range values
                        // are clamped rather than rejected.
                        level: s.level.clamp(0, 100),
                    })
                    .collect(),
            })
            .collect();

        let records = self
            .repository
            .replace_tree(drafts)
            .await
            .map_err(|e| SaveSkillsError::SaveFailed(e.to_string()))?;

        Ok(records.into_iter().map(record_to_view).collect())
    }
}
