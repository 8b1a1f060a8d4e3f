use super::*;

/// Tests publishing a draft.
///
/// Expected: Ok(course) with Published status and a publication time
#[tokio::test]
async fn publishing_sets_published_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;

    let repo = CourseRepository::new(db);
    let updated = repo.set_status(course.id, CourseStatus::Published).await?;

    assert_eq!(updated.status, CourseStatus::Published);
    assert!(updated.published_at.is_some());
    assert_eq!(repo.count_published().await?, 1);

    Ok(())
}

/// Tests returning a published course to draft.
///
/// Expected: Ok(course) with Draft status and no publication time
#[tokio::test]
async fn unpublishing_clears_published_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo.set_status(course.id, CourseStatus::Draft).await?;

    assert_eq!(updated.status, CourseStatus::Draft);
    assert!(updated.published_at.is_none());

    Ok(())
}
