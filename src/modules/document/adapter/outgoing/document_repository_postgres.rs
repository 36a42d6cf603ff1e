use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::document::application::ports::outgoing::document_repository::{
    DocumentDraft, DocumentRecord, DocumentRepository, DocumentRepositoryError,
};

use super::sea_orm_entity::documents::{self, ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct DocumentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> DocumentRepositoryError {
    DocumentRepositoryError::DatabaseError(e.to_string())
}

fn model_to_record(model: documents::Model) -> DocumentRecord {
    DocumentRecord {
        id: model.id,
        title: model.title,
        category: model.category,
        location: model.location,
        order_index: model.order_index,
    }
}

#[async_trait]
impl DocumentRepository for DocumentRepositoryPostgres {
    async fn list(&self) -> Result<Vec<DocumentRecord>, DocumentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }

    async fn replace_all(
        &self,
        drafts: Vec<DocumentDraft>,
    ) -> Result<Vec<DocumentRecord>, DocumentRepositoryError> {
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

    async fn find(&self, id: Uuid) -> Result<DocumentRecord, DocumentRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(DocumentRepositoryError::NotFound)?;

        Ok(model_to_record(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DocumentRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(DocumentRepositoryError::NotFound);
        }

        Ok(())
    }
}
