use super::*;

/// Tests completing an attempt.
///
/// Expected: Ok(attempt) completed, score equal to correct answers
#[tokio::test]
async fn completes_with_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, quiz, questions) = setup_quiz(db, 2).await?;
    let drawn: Vec<i32> = questions.iter().map(|(q, _)| q.id).collect();

    let repo = QuizAttemptRepository::new(db);
    let attempt = repo.create(quiz.id, user.id, &drawn).await?;
    let completed = repo.complete(attempt.id, 2, Utc::now()).await?;

    assert!(completed.is_completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.correct_answers, 2);
    assert_eq!(completed.score, 2);

    Ok(())
}

/// Tests that completed attempts are returned in completion order.
///
/// Expected: attempts ordered oldest completion first, incomplete ones excluded
#[tokio::test]
async fn completed_attempts_ordered_by_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, quiz, _) = setup_quiz(db, 1).await?;
    let now = Utc::now();

    let late = factory::quiz::QuizAttemptFactory::new(db, quiz.id, user.id)
        .completed(1, 1, now)
        .build()
        .await?;
    let early = factory::quiz::QuizAttemptFactory::new(db, quiz.id, user.id)
        .completed(0, 1, now - Duration::days(1))
        .build()
        .await?;
    factory::quiz::QuizAttemptFactory::new(db, quiz.id, user.id)
        .build()
        .await?;

    let repo = QuizAttemptRepository::new(db);
    let ids: Vec<i32> = repo
        .get_completed_by_user(user.id)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();

    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}
