use super::*;

/// Tests posting as an enrolled learner.
///
/// Expected: comment listed for the course with its author
#[tokio::test]
async fn enrolled_learner_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;

    let service = ForumService::new(db);
    let created = service
        .create_comment(&as_user(&learner), comment(course.id, "  How do lifetimes work? "))
        .await?;

    assert_eq!(created.content, "How do lifetimes work?");
    assert_eq!(created.author.id, learner.id);
    let listed = service.list(course.id, None, None).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].author.full_name, learner.full_name);

    Ok(())
}

/// Tests posting without an enrollment.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn requires_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let stranger = factory::create_user(db).await?;

    let result = ForumService::new(db)
        .create_comment(&as_user(&stranger), comment(course.id, "Hello"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests posting an empty comment.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;

    let result = ForumService::new(db)
        .create_comment(&as_user(&instructor), comment(course.id, "   "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
