//! Factories for course categories and technologies.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a course category named `"Category {id}"`.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::course_category::Model, DbErr> {
    create_category_named(db, format!("Category {}", next_id())).await
}

/// Creates a course category with the given name.
pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::course_category::Model, DbErr> {
    entity::course_category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a technology with the given name.
pub async fn create_technology(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::technology::Model, DbErr> {
    entity::technology::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a technology to a course.
pub async fn link_technology(
    db: &DatabaseConnection,
    course_id: i32,
    technology_id: i32,
) -> Result<entity::course_technology::Model, DbErr> {
    entity::course_technology::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        technology_id: ActiveValue::Set(technology_id),
    }
    .insert(db)
    .await
}
