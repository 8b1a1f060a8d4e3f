//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique test values and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an instructor and a published course owned by them.
///
/// # Returns
/// - `Ok((instructor, course))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_published_course(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::course::Model), DbErr> {
    let instructor = crate::factory::user::create_instructor(db).await?;
    let course = crate::factory::course::CourseFactory::new(db, instructor.id)
        .published()
        .build()
        .await?;

    Ok((instructor, course))
}

/// Creates a published course with `lessons` lessons, each holding one document.
///
/// Matches the common progress scenario where every lesson contributes exactly one
/// progress item.
///
/// # Arguments
/// - `db` - Database connection
/// - `lessons` - Number of lessons to create
///
/// # Returns
/// - `Ok((instructor, course, documents))` - Created entities, documents in lesson order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_documents(
    db: &DatabaseConnection,
    lessons: usize,
) -> Result<
    (
        entity::user::Model,
        entity::course::Model,
        Vec<entity::document::Model>,
    ),
    DbErr,
> {
    let (instructor, course) = create_published_course(db).await?;

    let mut documents = Vec::with_capacity(lessons);
    for position in 0..lessons {
        let lesson = crate::factory::lesson::LessonFactory::new(db, course.id)
            .position(position as i32)
            .build()
            .await?;
        documents.push(crate::factory::document::create_document(db, lesson.id).await?);
    }

    Ok((instructor, course, documents))
}
