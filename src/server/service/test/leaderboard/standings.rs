use super::*;

/// Tests that points combine completed courses, attempt scores and claimed badges.
///
/// Expected: 30 course + 4 score + 10 badge = 44 for the leader
#[tokio::test]
async fn sums_all_point_sources() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let badges = factory::badge::seed_badges(db).await?;

    let instructor = factory::create_instructor(db).await?;
    let course = factory::course::CourseFactory::new(db, instructor.id)
        .points(30)
        .published()
        .build()
        .await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let quiz = factory::quiz::create_quiz(db, lesson.id, bank.id, 5).await?;

    let leader = factory::create_user(db).await?;
    factory::enrollment::EnrollmentFactory::new(db, leader.id, course.id)
        .completed_at(Utc::now())
        .build()
        .await?;
    factory::quiz::QuizAttemptFactory::new(db, quiz.id, leader.id)
        .completed(4, 5, Utc::now())
        .build()
        .await?;
    let first_steps = factory::badge::find(&badges, "first_steps").unwrap();
    let repo = BadgeRepository::new(db);
    repo.unlock(leader.id, first_steps.id, Utc::now()).await?;
    repo.claim(leader.id, first_steps.id, Utc::now()).await?;

    let standings = LeaderboardService::new(db).standings().await?;

    assert_eq!(standings[0].user_id, leader.id);
    assert_eq!(standings[0].points, 44);
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[1].points, 0);

    Ok(())
}

/// Tests that an unclaimed badge adds no points.
///
/// Expected: 0 points with an unlocked but unclaimed badge
#[tokio::test]
async fn ignores_unclaimed_badges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let badges = factory::badge::seed_badges(db).await?;

    let learner = factory::create_user(db).await?;
    let scholar = factory::badge::find(&badges, "scholar").unwrap();
    BadgeRepository::new(db)
        .unlock(learner.id, scholar.id, Utc::now())
        .await?;

    let entry = LeaderboardService::new(db).rank_of(learner.id).await?.unwrap();

    assert_eq!(entry.points, 0);

    Ok(())
}
