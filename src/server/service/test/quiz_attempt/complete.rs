use super::*;

/// Tests scoring an attempt with one of two answers correct.
///
/// Expected: score 1 of 2, correctness revealed
#[tokio::test]
async fn scores_correct_answers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (learner, quiz, questions) = enrolled_quiz(db, 2, 2).await?;
    let user = as_user(&learner);

    let service = QuizAttemptService::new(db);
    let attempt = service.start(&user, quiz.id).await?.attempt;
    service
        .submit_answer(SubmitAnswerParams {
            attempt_id: attempt.id,
            user_id: learner.id,
            question_id: questions[0].0,
            option_id: questions[0].1,
        })
        .await?;
    service
        .submit_answer(SubmitAnswerParams {
            attempt_id: attempt.id,
            user_id: learner.id,
            question_id: questions[1].0,
            option_id: questions[1].2,
        })
        .await?;

    let detail = service.complete(&storage, &user, attempt.id).await?;

    assert!(detail.attempt.is_completed);
    assert_eq!(detail.attempt.correct_answers, 1);
    assert_eq!(detail.attempt.score, 1);
    assert!(detail.attempt.completed_at.is_some());
    let dto = detail.into_dto();
    assert!(dto.questions.iter().all(|q| q.is_correct.is_some()));

    Ok(())
}

/// Tests completing an attempt twice.
///
/// Expected: Err(BadRequest) on the second call
#[tokio::test]
async fn rejects_second_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (learner, quiz, _) = enrolled_quiz(db, 1, 1).await?;
    let user = as_user(&learner);

    let service = QuizAttemptService::new(db);
    let attempt = service.start(&user, quiz.id).await?.attempt;
    service.complete(&storage, &user, attempt.id).await?;

    let result = service.complete(&storage, &user, attempt.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a new start after completion creates a fresh attempt.
///
/// Expected: a different attempt id, history lists both
#[tokio::test]
async fn restarts_after_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (learner, quiz, _) = enrolled_quiz(db, 1, 1).await?;
    let user = as_user(&learner);

    let service = QuizAttemptService::new(db);
    let first = service.start(&user, quiz.id).await?.attempt;
    service.complete(&storage, &user, first.id).await?;
    let second = service.start(&user, quiz.id).await?.attempt;

    assert_ne!(first.id, second.id);
    assert_eq!(service.history(&user, quiz.id).await?.len(), 2);

    Ok(())
}

/// Tests that completing the only quiz of a course completes the course.
///
/// Expected: certificate file saved for the learner
#[tokio::test]
async fn completes_quiz_only_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (learner, quiz, _) = enrolled_quiz(db, 1, 1).await?;
    let user = as_user(&learner);

    let service = QuizAttemptService::new(db);
    let attempt = service.start(&user, quiz.id).await?.attempt;
    service.complete(&storage, &user, attempt.id).await?;

    let keys = storage.keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with("certificates/"));

    Ok(())
}
