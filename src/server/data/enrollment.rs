use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an ongoing enrollment
    pub async fn create(&self, user_id: i32, course_id: i32) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(course_id),
            enrolled_at: ActiveValue::Set(Utc::now()),
            completion_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds the enrollment of a user in a course
    pub async fn find(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .one(self.db)
            .await
    }

    /// Gets a user's enrollments, newest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .order_by_desc(entity::enrollment::Column::EnrolledAt)
            .order_by_desc(entity::enrollment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user's completed enrollments, most recent completion first
    pub async fn get_completed_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .filter(entity::enrollment::Column::CompletionDate.is_not_null())
            .order_by_desc(entity::enrollment::Column::CompletionDate)
            .all(self.db)
            .await
    }

    /// Gets every enrollment in a course
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .all(self.db)
            .await
    }

    /// Gets every completed enrollment across all users
    pub async fn get_all_completed(&self) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CompletionDate.is_not_null())
            .all(self.db)
            .await
    }

    /// Sets the completion date of an enrollment
    pub async fn set_completion_date(
        &self,
        id: i32,
        completion_date: DateTime<Utc>,
    ) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            completion_date: ActiveValue::Set(Some(completion_date)),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Enrollment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find().count(self.db).await
    }
}
