use super::*;

/// Tests claiming a badge that is not unlocked.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_locked_badge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let badges = factory::badge::seed_badges(db).await?;

    let learner = factory::create_user(db).await?;
    let scholar = factory::badge::find(&badges, "scholar").unwrap();

    let result = BadgeService::new(db).claim(learner.id, scholar.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests claiming an unlocked badge, then claiming it again.
///
/// Expected: first claim sets claimed_at, second is Err(BadRequest)
#[tokio::test]
async fn claims_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let badges = factory::badge::seed_badges(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    factory::enrollment::EnrollmentFactory::new(db, learner.id, course.id)
        .completed_at(Utc::now())
        .build()
        .await?;
    let first_steps = factory::badge::find(&badges, "first_steps").unwrap();

    let service = BadgeService::new(db);
    let claimed = service.claim(learner.id, first_steps.id).await?;

    assert!(claimed.is_claimed());
    assert!(claimed.is_unlocked());

    let again = service.claim(learner.id, first_steps.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests claiming an unknown badge.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_badge_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::badge::seed_badges(db).await?;

    let learner = factory::create_user(db).await?;

    let result = BadgeService::new(db).claim(learner.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
