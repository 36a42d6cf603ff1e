use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::skill::application::ports::outgoing::skill_repository::{
    SkillCategoryDraft, SkillCategoryRecord, SkillRecord, SkillRepository, SkillRepositoryError,
};

use super::sea_orm_entity::{skill_categories, skills};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

fn group_tree(
    categories: Vec<skill_categories::Model>,
    mut skill_rows: Vec<skills::Model>,
) -> Vec<SkillCategoryRecord> {
    skill_rows.sort_by_key(|s| s.order_index);

    categories
        .into_iter()
        .map(|category| {
            let skills = skill_rows
                .iter()
                .filter(|s| s.category_id == category.id)
                .map(|s| SkillRecord {
                    id: s.id,
                    name: s.name.clone(),
                    level: s.level,
                    order_index: s.order_index,
                })
                .collect();

            SkillCategoryRecord {
                id: category.id,
                title: category.title,
                order_index: category.order_index,
                skills,
            }
        })
        .collect()
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn fetch_tree(&self) -> Result<Vec<SkillCategoryRecord>, SkillRepositoryError> {
        let categories = skill_categories::Entity::find()
            .order_by_asc(skill_categories::Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let skill_rows = skills::Entity::find()
            .order_by_asc(skills::Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(group_tree(categories, skill_rows))
    }

    async fn replace_tree(
        &self,
        drafts: Vec<SkillCategoryDraft>,
    ) -> Result<Vec<SkillCategoryRecord>, SkillRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Skills first: no FK left dangling even without DB-level cascade.
        skills::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        skill_categories::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let now = Utc::now().fixed_offset();
        let mut records = Vec::with_capacity(drafts.len());

        for (category_position, category) in drafts.into_iter().enumerate() {
            let category_model = skill_categories::ActiveModel {
                id: Set(Uuid::new_v4()),
                title: Set(category.title),
                order_index: Set(category_position as i32),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            let mut skill_records = Vec::with_capacity(category.skills.len());
            for (skill_position, skill) in category.skills.into_iter().enumerate() {
                let skill_model = skills::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    category_id: Set(category_model.id),
                    name: Set(skill.name),
                    level: Set(skill.level),
                    order_index: Set(skill_position as i32),
                }
                .insert(&txn)
                .await
                .map_err(map_db_err)?;

                skill_records.push(SkillRecord {
                    id: skill_model.id,
                    name: skill_model.name,
                    level: skill_model.level,
                    order_index: skill_model.order_index,
                });
            }

            records.push(SkillCategoryRecord {
                id: category_model.id,
                title: category_model.title,
                order_index: category_model.order_index,
                skills: skill_records,
            });
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(records)
    }
}
