//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons with customizable fields.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    title: String,
    content: String,
    position: i32,
    points: i32,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"`
    /// - content: short markdown paragraph
    /// - position: `0`
    /// - points: `10`
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            course_id,
            title: format!("Lesson {}", id),
            content: "# Heading\n\nLesson body.".to_string(),
            position: 0,
            points: 10,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Inserts the lesson into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            course_id: ActiveValue::Set(self.course_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            position: ActiveValue::Set(self.position),
            points: ActiveValue::Set(self.points),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values in `course_id`.
pub async fn create_lesson(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, course_id).build().await
}
