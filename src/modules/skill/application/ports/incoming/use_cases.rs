use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    pub level: i32,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategoryView {
    pub id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub skills: Vec<SkillView>,
}

#[derive(Debug, Clone)]
pub struct SkillInput {
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryInput {
    pub title: String,
    pub skills: Vec<SkillInput>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveSkillsError {
    #[error("Save failed: {0}")]
    SaveFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCategoryView>, GetSkillsError>;
}

#[async_trait]
pub trait SaveSkillsUseCase: Send + Sync {
    async fn execute(
        &self,
        inputs: Vec<SkillCategoryInput>,
    ) -> Result<Vec<SkillCategoryView>, SaveSkillsError>;
}
