use super::*;

/// Tests that starting twice without completing resumes the same attempt.
///
/// Expected: same attempt id and same drawn questions
#[tokio::test]
async fn resumes_incomplete_attempt() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (learner, quiz, _) = enrolled_quiz(db, 5, 3).await?;
    let user = as_user(&learner);

    let service = QuizAttemptService::new(db);
    let first = service.start(&user, quiz.id).await?;
    let second = service.start(&user, quiz.id).await?;

    assert_eq!(first.attempt.id, second.attempt.id);
    let ids = |d: &crate::server::model::attempt::QuizAttemptDetail| {
        d.questions.iter().map(|q| q.question.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));

    Ok(())
}

/// Tests that an attempt draws quiz_size distinct questions.
///
/// Expected: 3 distinct questions from a bank of 5
#[tokio::test]
async fn draws_distinct_questions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (learner, quiz, _) = enrolled_quiz(db, 5, 3).await?;

    let detail = QuizAttemptService::new(db)
        .start(&as_user(&learner), quiz.id)
        .await?;

    let mut ids: Vec<i32> = detail.questions.iter().map(|q| q.question.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(detail.attempt.total_questions, 3);
    let positions: Vec<i32> = detail.questions.iter().map(|q| q.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    Ok(())
}

/// Tests a quiz size larger than its bank.
///
/// Expected: every bank question drawn once
#[tokio::test]
async fn caps_draw_at_bank_size() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (learner, quiz, _) = enrolled_quiz(db, 2, 10).await?;

    let detail = QuizAttemptService::new(db)
        .start(&as_user(&learner), quiz.id)
        .await?;

    assert_eq!(detail.questions.len(), 2);

    Ok(())
}

/// Tests starting a quiz whose bank has no questions.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_bank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (learner, quiz, _) = enrolled_quiz(db, 0, 3).await?;

    let result = QuizAttemptService::new(db)
        .start(&as_user(&learner), quiz.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests starting a quiz without being enrolled in its course.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn requires_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, quiz, _) = enrolled_quiz(db, 2, 1).await?;
    let stranger = factory::create_user(db).await?;

    let result = QuizAttemptService::new(db)
        .start(&as_user(&stranger), quiz.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
