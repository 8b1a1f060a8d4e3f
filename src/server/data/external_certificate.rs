use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::certificate::{ExternalCertificate, ExternalCertificateParams};

pub struct ExternalCertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExternalCertificateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ExternalCertificateParams) -> Result<ExternalCertificate, DbErr> {
        let entity = entity::external_certificate::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            issuer: ActiveValue::Set(params.issuer),
            issued_on: ActiveValue::Set(params.issued_on),
            credential_url: ActiveValue::Set(params.credential_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ExternalCertificate::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ExternalCertificate>, DbErr> {
        let entity = entity::prelude::ExternalCertificate::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ExternalCertificate::from_entity))
    }

    /// Gets a user's external certificates, most recently issued first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ExternalCertificate>, DbErr> {
        let entities = entity::prelude::ExternalCertificate::find()
            .filter(entity::external_certificate::Column::UserId.eq(user_id))
            .order_by_desc(entity::external_certificate::Column::IssuedOn)
            .order_by_desc(entity::external_certificate::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ExternalCertificate::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: ExternalCertificateParams,
    ) -> Result<ExternalCertificate, DbErr> {
        let entity = entity::external_certificate::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(params.title),
            issuer: ActiveValue::Set(params.issuer),
            issued_on: ActiveValue::Set(params.issued_on),
            credential_url: ActiveValue::Set(params.credential_url),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(ExternalCertificate::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ExternalCertificate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
