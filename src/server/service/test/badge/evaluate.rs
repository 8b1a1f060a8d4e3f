use super::*;

/// Tests that a first completed course unlocks first_steps and notifies the learner.
///
/// Expected: first_steps unlocked, scholar at 1 of 5, one badge notification
#[tokio::test]
async fn unlocks_first_steps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    factory::enrollment::EnrollmentFactory::new(db, learner.id, course.id)
        .completed_at(Utc::now())
        .build()
        .await?;

    let progress = BadgeService::new(db).evaluate(learner.id).await?;

    let first_steps = by_code(&progress, "first_steps");
    assert!(first_steps.is_unlocked());
    assert_eq!(first_steps.current_progress, 1);
    let scholar = by_code(&progress, "scholar");
    assert!(!scholar.is_unlocked());
    assert_eq!(scholar.current_progress, 1);

    let (notifications, _) = NotificationRepository::new(db)
        .get_paginated_by_user(learner.id, 0, 50, false)
        .await?;
    let unlocked = notifications
        .iter()
        .filter(|n| n.kind == NotificationKind::BadgeUnlocked)
        .count();
    assert!(unlocked >= 1);

    Ok(())
}

/// Tests that progress never exceeds the badge target.
///
/// Expected: every badge reports progress within 0..=target
#[tokio::test]
async fn progress_is_capped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    for _ in 0..12 {
        factory::forum::create_comment(db, course.id, learner.id).await?;
    }

    let progress = BadgeService::new(db).evaluate(learner.id).await?;

    for badge in &progress {
        assert!(badge.current_progress >= 0);
        assert!(badge.current_progress <= badge.badge.target_progress);
    }
    assert_eq!(by_code(&progress, "commentator").current_progress, 10);

    Ok(())
}

/// Tests that an unlocked badge stays unlocked when its source data goes away.
///
/// Expected: first_steps still unlocked at target after the enrollment is deleted
#[tokio::test]
async fn unlock_is_monotonic() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    let enrollment = factory::enrollment::EnrollmentFactory::new(db, learner.id, course.id)
        .completed_at(Utc::now())
        .build()
        .await?;

    let service = BadgeService::new(db);
    service.evaluate(learner.id).await?;
    EnrollmentRepository::new(db).delete(enrollment.id).await?;

    let progress = service.evaluate(learner.id).await?;

    let first_steps = by_code(&progress, "first_steps");
    assert!(first_steps.is_unlocked());
    assert_eq!(first_steps.current_progress, first_steps.badge.target_progress);

    Ok(())
}

/// Tests the perfectionist run over consecutive perfect attempts.
///
/// Expected: unlocked after five perfect attempts in a row
#[tokio::test]
async fn perfectionist_counts_consecutive_perfect_attempts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let quiz = factory::quiz::create_quiz(db, lesson.id, bank.id, 3).await?;
    let learner = factory::create_user(db).await?;

    let start = Utc::now() - Duration::hours(10);
    factory::quiz::QuizAttemptFactory::new(db, quiz.id, learner.id)
        .completed(1, 3, start)
        .build()
        .await?;
    for i in 1..=5 {
        factory::quiz::QuizAttemptFactory::new(db, quiz.id, learner.id)
            .completed(3, 3, start + Duration::hours(i))
            .build()
            .await?;
    }

    let progress = BadgeService::new(db).evaluate(learner.id).await?;

    assert!(by_code(&progress, "perfectionist").is_unlocked());
    assert_eq!(by_code(&progress, "quiz_enthusiast").current_progress, 6);

    Ok(())
}

/// Tests the daily streak over quiz completions on consecutive days.
///
/// Expected: 3 of 7 days for a three-day streak
#[tokio::test]
async fn daily_learner_counts_consecutive_days() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let quiz = factory::quiz::create_quiz(db, lesson.id, bank.id, 1).await?;
    let learner = factory::create_user(db).await?;

    let base = Utc::now() - Duration::days(30);
    for day in [0, 1, 2, 5] {
        factory::quiz::QuizAttemptFactory::new(db, quiz.id, learner.id)
            .completed(0, 1, base + Duration::days(day))
            .build()
            .await?;
    }

    let progress = BadgeService::new(db).evaluate(learner.id).await?;

    assert_eq!(by_code(&progress, "daily_learner").current_progress, 3);

    Ok(())
}
