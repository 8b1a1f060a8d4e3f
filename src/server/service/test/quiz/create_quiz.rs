use super::*;

fn params(lesson_id: i32, quiz_bank_id: i32) -> CreateQuizParams {
    CreateQuizParams {
        lesson_id,
        quiz_bank_id,
        title: "Checkpoint".to_string(),
        quiz_size: 3,
    }
}

/// Tests attaching a second quiz to the same lesson.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn one_quiz_per_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let user = as_user(&instructor);

    let service = QuizService::new(db);
    service.create_quiz(&user, params(lesson.id, bank.id)).await?;
    let result = service.create_quiz(&user, params(lesson.id, bank.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests using a bank from another course.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn bank_must_match_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let other_course = factory::create_course(db, instructor.id).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let foreign_bank = factory::quiz::create_quiz_bank(db, other_course.id).await?;

    let result = QuizService::new(db)
        .create_quiz(&as_user(&instructor), params(lesson.id, foreign_bank.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
