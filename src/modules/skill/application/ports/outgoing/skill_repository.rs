use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    /// Proficiency 0–100 shown as a bar on the skills page.
    pub level: i32,
    pub order_index: i32,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryRecord {
    pub id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone)]
pub struct SkillDraft {
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryDraft {
    pub title: String,
    pub skills: Vec<SkillDraft>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Categories ordered, each with its skills ordered.
    async fn fetch_tree(&self) -> Result<Vec<SkillCategoryRecord>, SkillRepositoryError>;

    /// Bulk save of the whole tree: delete-all-then-reinsert inside one
    /// transaction, order_index = position at both levels. Skill rows go
    /// with their categories (FK cascade mirrors this on raw deletes).
    async fn replace_tree(
        &self,
        drafts: Vec<SkillCategoryDraft>,
    ) -> Result<Vec<SkillCategoryRecord>, SkillRepositoryError>;
}
