use super::*;

/// Tests enrolling a learner.
///
/// Expected: Ok(enrollment) without completion date, findable by user and course
#[tokio::test]
async fn creates_ongoing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let user = factory::create_user(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(user.id, course.id).await?;

    assert!(enrollment.completion_date.is_none());
    let found = repo.find(user.id, course.id).await?;
    assert_eq!(found.map(|e| e.id), Some(enrollment.id));
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}

/// Tests looking up an enrollment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_when_not_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let user = factory::create_user(db).await?;

    let repo = EnrollmentRepository::new(db);

    assert!(repo.find(user.id, course.id).await?.is_none());

    Ok(())
}
