use super::*;

/// Tests deleting another user's comment.
///
/// Expected: Err(AccessDenied) for a learner, Ok for an admin
#[tokio::test]
async fn only_author_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let posted = factory::forum::create_comment(db, course.id, author.id).await?;
    factory::forum::create_reply(db, posted.id, other.id).await?;

    let service = ForumService::new(db);
    let denied = service.delete_comment(&as_user(&other), posted.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete_comment(&as_user(&admin), posted.id).await?;
    assert!(service.list(course.id, None, None).await?.is_empty());

    Ok(())
}
