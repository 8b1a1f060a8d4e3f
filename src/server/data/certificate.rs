use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::certificate::NewCertificate;

pub struct CertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewCertificate) -> Result<entity::certificate::Model, DbErr> {
        entity::certificate::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            course_id: ActiveValue::Set(params.course_id),
            certificate_number: ActiveValue::Set(params.certificate_number),
            file_key: ActiveValue::Set(params.file_key),
            file_url: ActiveValue::Set(params.file_url),
            issued_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts a certificate, or returns the one already issued for the same learner
    /// and course.
    ///
    /// Two concurrent generations can both find no certificate; the unique
    /// (user, course) index rejects the second insert, which then reads the stored row.
    ///
    /// # Returns
    /// - `Ok((certificate, true))` - Row inserted by this call
    /// - `Ok((certificate, false))` - A certificate for the pair already existed
    /// - `Err(DbErr)` - Insert failed for any other reason
    pub async fn create_or_get(
        &self,
        params: NewCertificate,
    ) -> Result<(entity::certificate::Model, bool), DbErr> {
        let (user_id, course_id) = (params.user_id, params.course_id);

        match self.create(params).await {
            Ok(certificate) => Ok((certificate, true)),
            Err(e) => match self.find_by_user_and_course(user_id, course_id).await? {
                Some(existing) => Ok((existing, false)),
                None => Err(e),
            },
        }
    }

    pub async fn find_by_user_and_course(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::UserId.eq(user_id))
            .filter(entity::certificate::Column::CourseId.eq(course_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_number(
        &self,
        certificate_number: &str,
    ) -> Result<Option<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::CertificateNumber.eq(certificate_number))
            .one(self.db)
            .await
    }

    /// Gets a user's certificates, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::UserId.eq(user_id))
            .order_by_desc(entity::certificate::Column::IssuedAt)
            .order_by_desc(entity::certificate::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every certificate issued for a course
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<entity::certificate::Model>, DbErr> {
        entity::prelude::Certificate::find()
            .filter(entity::certificate::Column::CourseId.eq(course_id))
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Certificate::find().count(self.db).await
    }
}
