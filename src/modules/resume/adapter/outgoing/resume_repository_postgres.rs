use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::resume::application::ports::outgoing::resume_repository::{
    CertificationDraft, CertificationRecord, EducationDraft, EducationRecord, ExperienceDraft,
    ExperienceRecord, ResumeRepository, ResumeRepositoryError,
};

use super::sea_orm_entity::{certifications, education, experience};

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

fn education_record(model: education::Model) -> EducationRecord {
    EducationRecord {
        id: model.id,
        institution: model.institution,
        degree: model.degree,
        field: model.field,
        start_year: model.start_year,
        end_year: model.end_year,
        order_index: model.order_index,
    }
}

fn experience_record(model: experience::Model) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        company: model.company,
        title: model.title,
        summary: model.summary,
        start_date: model.start_date,
        end_date: model.end_date,
        order_index: model.order_index,
    }
}

fn certification_record(model: certifications::Model) -> CertificationRecord {
    CertificationRecord {
        id: model.id,
        name: model.name,
        issuer: model.issuer,
        issued_on: model.issued_on,
        credential_url: model.credential_url,
        order_index: model.order_index,
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn list_education(&self) -> Result<Vec<EducationRecord>, ResumeRepositoryError> {
        let models = education::Entity::find()
            .order_by_asc(education::Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(education_record).collect())
    }

    async fn replace_education(
        &self,
        drafts: Vec<EducationDraft>,
    ) -> Result<Vec<EducationRecord>, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        education::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let mut records = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.into_iter().enumerate() {
            let model = education::ActiveModel {
                id: Set(Uuid::new_v4()),
                institution: Set(draft.institution),
                degree: Set(draft.degree),
                field: Set(draft.field),
                start_year: Set(draft.start_year),
                end_year: Set(draft.end_year),
                order_index: Set(position as i32),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            records.push(education_record(model));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(records)
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceRecord>, ResumeRepositoryError> {
        let models = experience::Entity::find()
            .order_by_asc(experience::Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(experience_record).collect())
    }

    async fn replace_experience(
        &self,
        drafts: Vec<ExperienceDraft>,
    ) -> Result<Vec<ExperienceRecord>, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        experience::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let mut records = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.into_iter().enumerate() {
            let model = experience::ActiveModel {
                id: Set(Uuid::new_v4()),
                company: Set(draft.company),
                title: Set(draft.title),
                summary: Set(draft.summary),
                start_date: Set(draft.start_date),
                end_date: Set(draft.end_date),
                order_index: Set(position as i32),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            records.push(experience_record(model));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(records)
    }

    async fn list_certifications(
        &self,
    ) -> Result<Vec<CertificationRecord>, ResumeRepositoryError> {
        let models = certifications::Entity::find()
            .order_by_asc(certifications::Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(certification_record).collect())
    }

    async fn replace_certifications(
        &self,
        drafts: Vec<CertificationDraft>,
    ) -> Result<Vec<CertificationRecord>, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        certifications::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let mut records = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.into_iter().enumerate() {
            let model = certifications::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(draft.name),
                issuer: Set(draft.issuer),
                issued_on: Set(draft.issued_on),
                credential_url: Set(draft.credential_url),
                order_index: Set(position as i32),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            records.push(certification_record(model));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(records)
    }
}
