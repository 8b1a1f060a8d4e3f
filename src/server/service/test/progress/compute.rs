use super::*;

/// Tests the two-lesson scenario: one document per lesson, no quizzes.
///
/// Expected: 50% after one document, 100% and complete after both
#[tokio::test]
async fn half_then_full_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (_, course, documents) = factory::helpers::create_course_with_documents(db, 2).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;
    let user = as_user(&learner);

    let service = ProgressService::new(db);
    service
        .complete_document(&storage, &user, documents[0].id)
        .await?;

    let progress = service.compute(user.id, course.id).await?;
    assert_eq!(progress.total_items, 2);
    assert_eq!(progress.completed_items, 1);
    assert_eq!(progress.percentage(), 50);
    assert!(!service
        .has_learner_completed_all_course_content(user.id, course.id)
        .await?);

    service
        .complete_document(&storage, &user, documents[1].id)
        .await?;

    let progress = service.compute(user.id, course.id).await?;
    assert_eq!(progress.percentage(), 100);
    assert!(service
        .has_learner_completed_all_course_content(user.id, course.id)
        .await?);

    Ok(())
}

/// Tests that a course without lessons reports no progress.
///
/// Expected: 0 items, 0%, not complete
#[tokio::test]
async fn empty_course_is_zero_percent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;

    let progress = ProgressService::new(db).compute(learner.id, course.id).await?;

    assert_eq!(progress.total_items, 0);
    assert_eq!(progress.percentage(), 0);
    assert!(!progress.is_complete());

    Ok(())
}

/// Tests that a lesson quiz counts as one progress item.
///
/// Expected: 1 document + 1 quiz = 2 items
#[tokio::test]
async fn quiz_counts_as_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    factory::quiz::create_quiz(db, documents[0].lesson_id, bank.id, 3).await?;
    let learner = factory::create_user(db).await?;

    let progress = ProgressService::new(db).compute(learner.id, course.id).await?;

    assert_eq!(progress.total_items, 2);
    assert_eq!(progress.completed_items, 0);

    Ok(())
}
