//! Enrollment factory for creating test enrollments.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating enrollments with optional completion.
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    course_id: i32,
    enrolled_at: DateTime<Utc>,
    completion_date: Option<DateTime<Utc>>,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates an ongoing enrollment factory enrolled now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, course_id: i32) -> Self {
        Self {
            db,
            user_id,
            course_id,
            enrolled_at: Utc::now(),
            completion_date: None,
        }
    }

    pub fn enrolled_at(mut self, enrolled_at: DateTime<Utc>) -> Self {
        self.enrolled_at = enrolled_at;
        self
    }

    pub fn completed_at(mut self, completion_date: DateTime<Utc>) -> Self {
        self.completion_date = Some(completion_date);
        self
    }

    /// Inserts the enrollment into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            course_id: ActiveValue::Set(self.course_id),
            enrolled_at: ActiveValue::Set(self.enrolled_at),
            completion_date: ActiveValue::Set(self.completion_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ongoing enrollment of `user_id` in `course_id`.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, user_id, course_id).build().await
}
