use super::*;

/// Tests creating an attempt with drawn questions.
///
/// Verifies the attempt starts incomplete and its questions keep the draw order.
///
/// Expected: Ok(attempt) with questions at positions 0..n
#[tokio::test]
async fn creates_attempt_with_ordered_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, quiz, questions) = setup_quiz(db, 3).await?;
    let drawn: Vec<i32> = questions.iter().rev().map(|(q, _)| q.id).collect();

    let repo = QuizAttemptRepository::new(db);
    let attempt = repo.create(quiz.id, user.id, &drawn).await?;

    assert!(!attempt.is_completed);
    assert_eq!(attempt.total_questions, 3);
    assert_eq!(attempt.score, 0);

    let rows = repo.get_questions(attempt.id).await?;
    let ids: Vec<i32> = rows.iter().map(|r| r.question_id).collect();
    assert_eq!(ids, drawn);
    assert_eq!(rows[0].position, 0);

    Ok(())
}

/// Tests finding the learner's incomplete attempt.
///
/// Expected: Ok(Some) for the open attempt, Ok(None) once it is completed
#[tokio::test]
async fn finds_incomplete_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, quiz, questions) = setup_quiz(db, 1).await?;

    let repo = QuizAttemptRepository::new(db);
    let attempt = repo.create(quiz.id, user.id, &[questions[0].0.id]).await?;

    let open = repo.find_incomplete(user.id, quiz.id).await?;
    assert_eq!(open.map(|a| a.id), Some(attempt.id));

    repo.complete(attempt.id, 0, Utc::now()).await?;
    assert!(repo.find_incomplete(user.id, quiz.id).await?.is_none());

    Ok(())
}
