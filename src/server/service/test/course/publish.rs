use super::*;

/// Tests publishing a course without lessons.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;

    let result = CourseService::new(db)
        .publish(&as_user(&instructor), course.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests publishing a course with a lesson that has no document or quiz.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_lesson_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    factory::create_document(db, lesson.id).await?;
    factory::create_lesson(db, course.id).await?;

    let result = CourseService::new(db)
        .publish(&as_user(&instructor), course.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests publishing a course whose lessons all have content.
///
/// Expected: published with published_at set, instructor notified
#[tokio::test]
async fn publishes_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    factory::create_document(db, lesson.id).await?;

    let published = CourseService::new(db)
        .publish(&as_user(&instructor), course.id)
        .await?;

    assert_eq!(published.status, CourseStatus::Published);
    assert!(published.published_at.is_some());
    let (notifications, _) = NotificationRepository::new(db)
        .get_paginated_by_user(instructor.id, 0, 10, false)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::CoursePublished);

    Ok(())
}

/// Tests publishing another instructor's course.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_other_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_instructor(db).await?;
    let other = factory::create_instructor(db).await?;
    let course = factory::create_course(db, owner.id).await?;

    let result = CourseService::new(db)
        .publish(&as_user(&other), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
