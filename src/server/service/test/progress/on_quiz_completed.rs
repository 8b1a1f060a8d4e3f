use super::*;

/// Tests that completing a lesson's quiz counts toward course progress.
///
/// Expected: the quiz lesson is listed and progress reaches 50%
#[tokio::test]
async fn marks_quiz_item_done() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (_, course, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let lesson_id = documents[0].lesson_id;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    factory::quiz::create_quiz(db, lesson_id, bank.id, 1).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;

    let progress = ProgressService::new(db)
        .on_quiz_completed(&storage, learner.id, lesson_id)
        .await?;

    assert_eq!(progress.completed_quiz_lesson_ids, vec![lesson_id]);
    assert_eq!(progress.percentage(), 50);
    assert!(storage.keys().is_empty());

    Ok(())
}
