use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, UserAccount};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{self, Column, Entity};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_account(model: users::Model) -> UserAccount {
    UserAccount {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role: Role::parse(&model.role),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<UserAccount, UserQueryError> {
        let model = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .ok_or(UserQueryError::NotFound)?;

        Ok(model_to_account(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<UserAccount, UserQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .ok_or(UserQueryError::NotFound)?;

        Ok(model_to_account(model))
    }
}
