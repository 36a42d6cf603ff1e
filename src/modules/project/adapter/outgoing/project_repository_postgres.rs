use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

use super::sea_orm_entity::projects::{self, ActiveModel, Column, Entity};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: projects::Model) -> Result<ProjectRecord, ProjectRepositoryError> {
    let tech_stack: Vec<String> = serde_json::from_value(model.tech_stack)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

    Ok(ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        tech_stack,
        image_location: model.image_location,
        repo_url: model.repo_url,
        live_url: model.live_url,
        featured: model.featured,
        order_index: model.order_index,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn draft_to_active(
    draft: ProjectDraft,
    order_index: i32,
) -> Result<ActiveModel, ProjectRepositoryError> {
    let tech_stack = serde_json::to_value(&draft.tech_stack)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

    let now = Utc::now().fixed_offset();

    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(draft.title),
        description: Set(draft.description),
        tech_stack: Set(tech_stack),
        image_location: Set(draft.image_location),
        repo_url: Set(draft.repo_url),
        live_url: Set(draft.live_url),
        featured: Set(draft.featured),
        order_index: Set(order_index),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

fn map_db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

async fn insert_ordered(
    txn: &DatabaseTransaction,
    drafts: Vec<ProjectDraft>,
) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
    let mut records = Vec::with_capacity(drafts.len());

    for (position, draft) in drafts.into_iter().enumerate() {
        let active = draft_to_active(draft, position as i32)?;
        let model = active.insert(txn).await.map_err(map_db_err)?;
        records.push(model_to_record(model)?);
    }

    Ok(records)
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn create(&self, draft: ProjectDraft) -> Result<ProjectRecord, ProjectRepositoryError> {
        let last = Entity::find()
            .order_by_desc(Column::OrderIndex)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let next_index = last.map(|m| m.order_index + 1).unwrap_or(0);

        let model = draft_to_active(draft, next_index)?
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_record(model)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let tech_stack = serde_json::to_value(&draft.tech_stack)
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

        let mut active: ActiveModel = found.into();
        active.title = Set(draft.title);
        active.description = Set(draft.description);
        active.tech_stack = Set(tech_stack);
        active.image_location = Set(draft.image_location);
        active.repo_url = Set(draft.repo_url);
        active.live_url = Set(draft.live_url);
        active.featured = Set(draft.featured);

        let model = active.update(&*self.db).await.map_err(map_db_err)?;

        model_to_record(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn replace_all(
        &self,
        drafts: Vec<ProjectDraft>,
    ) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;

        let records = insert_ordered(&txn, drafts).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(records)
    }
}

// ============================================================================
// Tests
// ============================================================================
