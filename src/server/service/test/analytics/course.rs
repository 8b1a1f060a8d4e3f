use super::*;

/// Tests course figures with one of two learners finished.
///
/// Expected: two enrollments, one completion, rate 0.5, no quizzes
#[tokio::test]
async fn counts_enrollments_and_completions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course, _) = factory::helpers::create_course_with_documents(db, 2).await?;
    let finished = factory::create_user(db).await?;
    let started = factory::create_user(db).await?;
    factory::enrollment::EnrollmentFactory::new(db, finished.id, course.id)
        .completed_at(Utc::now())
        .build()
        .await?;
    factory::create_enrollment(db, started.id, course.id).await?;

    let analytics = AnalyticsService::new(db)
        .course(&as_user(&instructor), course.id)
        .await?;

    assert_eq!(analytics.course_id, course.id);
    assert_eq!(analytics.enrollment_count, 2);
    assert_eq!(analytics.completion_count, 1);
    assert_eq!(analytics.completion_rate, 0.5);
    assert!(analytics.quizzes.is_empty());

    Ok(())
}

/// Tests course figures requested by a learner.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_learner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;

    let result = AnalyticsService::new(db)
        .course(&as_user(&learner), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the platform overview counts.
///
/// Expected: users, courses and enrollments counted, drafts excluded from published
#[tokio::test]
async fn overview_counts_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, published) = factory::helpers::create_published_course(db).await?;
    factory::create_course(db, instructor.id).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, published.id).await?;

    let overview = AnalyticsService::new(db).overview().await?;

    assert_eq!(overview.user_count, 2);
    assert_eq!(overview.course_count, 2);
    assert_eq!(overview.published_course_count, 1);
    assert_eq!(overview.enrollment_count, 1);
    assert_eq!(overview.certificate_count, 0);

    Ok(())
}
