use super::*;

/// Tests that deleting a comment removes its replies.
///
/// Expected: neither the comment nor its replies remain
#[tokio::test]
async fn removes_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let user = factory::create_user(db).await?;
    let comment = factory::forum::create_comment(db, course.id, user.id).await?;
    let reply = factory::forum::create_reply(db, comment.id, user.id).await?;

    let repo = ForumRepository::new(db);
    repo.delete_comment(comment.id).await?;

    assert!(repo.find_comment(comment.id).await?.is_none());
    assert!(repo.find_reply(reply.id).await?.is_none());

    Ok(())
}
