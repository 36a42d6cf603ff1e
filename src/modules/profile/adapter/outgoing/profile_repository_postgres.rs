use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::profile_repository::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError, UpsertProfileData,
};

use super::sea_orm_entity::user_profiles::{self, ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_record(model: user_profiles::Model) -> Result<ProfileRecord, ProfileRepositoryError> {
    let skills: Vec<String> = serde_json::from_value(model.skills)
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;

    Ok(ProfileRecord {
        id: model.id,
        user_id: model.user_id,
        headline: model.headline,
        bio: model.bio,
        location: model.location,
        contact_email: model.contact_email,
        skills,
        image_location: model.image_location,
        social_links: model.social_links,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn skills_to_json(skills: &[String]) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(skills)
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_first(&self) -> Result<ProfileRecord, ProfileRepositoryError> {
        let model = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::NotFound)?;

        model_to_record(model)
    }

    async fn upsert(
        &self,
        owner: UserId,
        data: UpsertProfileData,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let existing = Entity::find()
            .filter(Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        let skills = skills_to_json(&data.skills)?;

        let model = match existing {
            Some(found) => {
                let mut active: ActiveModel = found.into();
                active.headline = Set(data.headline);
                active.bio = Set(data.bio);
                active.location = Set(data.location);
                active.contact_email = Set(data.contact_email);
                active.skills = Set(skills);
                active.image_location = Set(data.image_location);
                active.social_links = Set(data.social_links);

                active
                    .update(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
            None => {
                let now = Utc::now().fixed_offset();
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(owner_uuid),
                    headline: Set(data.headline),
                    bio: Set(data.bio),
                    location: Set(data.location),
                    contact_email: Set(data.contact_email),
                    skills: Set(skills),
                    image_location: Set(data.image_location),
                    social_links: Set(data.social_links),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                active
                    .insert(&*self.db)
                    .await
                    .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            }
        };

        model_to_record(model)
    }
}
