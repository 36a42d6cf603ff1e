use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryItemDraft, GalleryItemRecord, GalleryRepository, GalleryRepositoryError,
};

use super::sea_orm_entity::gallery_items::{self, ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError(e.to_string())
}

fn model_to_record(model: gallery_items::Model) -> GalleryItemRecord {
    GalleryItemRecord {
        id: model.id,
        title: model.title,
        category: model.category,
        location: model.location,
        order_index: model.order_index,
    }
}

#[async_trait]
impl GalleryRepository for GalleryRepositoryPostgres {
    async fn list(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError> {
        let mut query = Entity::find().order_by_asc(Column::OrderIndex);

        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn replace_all(
        &self,
        drafts: Vec<GalleryItemDraft>,
    ) -> Result<Vec<GalleryItemRecord>, GalleryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Entity::delete_many().exec(&txn).await.map_err(map_db_err)?;

        let mut records = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.into_iter().enumerate() {
            let model = ActiveModel {
                id: Set(Uuid::new_v4()),
                title: Set(draft.title),
                category: Set(draft.category),
                location: Set(draft.location),
                order_index: Set(position as i32),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            records.push(model_to_record(model));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(records)
    }

    async fn find(&self, id: Uuid) -> Result<GalleryItemRecord, GalleryRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(GalleryRepositoryError::NotFound)?;

        Ok(model_to_record(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), GalleryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(GalleryRepositoryError::NotFound);
        }

        Ok(())
    }
}
