//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::CourseStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let course = CourseFactory::new(&db, instructor.id)
///     .title("Rust 101")
///     .category_id(Some(category.id))
///     .published()
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    instructor_id: i32,
    category_id: Option<i32>,
    title: String,
    description: String,
    status: CourseStatus,
    points: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - status: `Draft`
    /// - category: none
    /// - points: `0`
    pub fn new(db: &'a DatabaseConnection, instructor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            instructor_id,
            category_id: None,
            title: format!("Course {}", id),
            description: "Test course description".to_string(),
            status: CourseStatus::Draft,
            points: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Marks the course as published.
    pub fn published(mut self) -> Self {
        self.status = CourseStatus::Published;
        self
    }

    /// Inserts the course into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        let published_at = match self.status {
            CourseStatus::Published => Some(now),
            CourseStatus::Draft => None,
        };

        entity::course::ActiveModel {
            instructor_id: ActiveValue::Set(self.instructor_id),
            category_id: ActiveValue::Set(self.category_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            thumbnail_key: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            points: ActiveValue::Set(self.points),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(published_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft course owned by `instructor_id`.
pub async fn create_course(
    db: &DatabaseConnection,
    instructor_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, instructor_id).build().await
}
