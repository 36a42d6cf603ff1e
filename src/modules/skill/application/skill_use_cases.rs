use std::sync::Arc;

use crate::skill::application::ports::incoming::use_cases::{GetSkillsUseCase, SaveSkillsUseCase};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub save: Arc<dyn SaveSkillsUseCase + Send + Sync>,
}
