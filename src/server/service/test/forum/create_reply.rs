use super::*;

/// Tests that replying to someone else's comment notifies its author.
///
/// Expected: one forum reply notification for the comment author
#[tokio::test]
async fn notifies_comment_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;
    let asked = factory::forum::create_comment(db, course.id, learner.id).await?;

    ForumService::new(db)
        .create_reply(&as_user(&instructor), asked.id, "Read chapter 4")
        .await?;

    let (notifications, _) = NotificationRepository::new(db)
        .get_paginated_by_user(learner.id, 0, 10, false)
        .await?;
    let replies: Vec<_> = notifications
        .iter()
        .filter(|n| n.kind == NotificationKind::ForumReply)
        .collect();
    assert_eq!(replies.len(), 1);

    Ok(())
}

/// Tests replying to one's own comment.
///
/// Expected: no forum reply notification
#[tokio::test]
async fn skips_self_reply_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;
    let own = factory::forum::create_comment(db, course.id, learner.id).await?;

    ForumService::new(db)
        .create_reply(&as_user(&learner), own.id, "Never mind, solved it")
        .await?;

    let (notifications, _) = NotificationRepository::new(db)
        .get_paginated_by_user(learner.id, 0, 10, false)
        .await?;
    assert!(notifications
        .iter()
        .all(|n| n.kind != NotificationKind::ForumReply));

    Ok(())
}
