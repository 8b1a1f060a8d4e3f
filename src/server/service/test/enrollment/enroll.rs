use super::*;

/// Tests enrolling in a published course.
///
/// Expected: enrollment at 0% listed for the learner
#[tokio::test]
async fn enrolls_in_published_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_course_with_documents(db, 2).await?;
    let learner = as_user(&factory::create_user(db).await?);

    let service = EnrollmentService::new(db);
    let enrollment = service.enroll(&learner, course.id).await?;

    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.progress, 0);
    assert!(enrollment.completion_date.is_none());
    let mine = service.list_mine(&learner).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].course_title, course.title);

    Ok(())
}

/// Tests enrolling twice.
///
/// Expected: Err(BadRequest) on the second call
#[tokio::test]
async fn rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = as_user(&factory::create_user(db).await?);

    let service = EnrollmentService::new(db);
    service.enroll(&learner, course.id).await?;
    let result = service.enroll(&learner, course.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests enrolling in a draft as its instructor.
///
/// Expected: Err(BadRequest) since drafts take no enrollments
#[tokio::test]
async fn rejects_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;

    let result = EnrollmentService::new(db)
        .enroll(&as_user(&instructor), course.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests leaving a course the learner never joined.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unenroll_requires_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = as_user(&factory::create_user(db).await?);

    let result = EnrollmentService::new(db).unenroll(&learner, course.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
