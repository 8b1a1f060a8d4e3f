use super::*;

/// Tests filtering course comments by lesson.
///
/// Expected: all comments without a filter, only the lesson's with one
#[tokio::test]
async fn filters_by_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let user = factory::create_user(db).await?;

    let repo = ForumRepository::new(db);
    factory::forum::create_comment(db, course.id, user.id).await?;
    let on_lesson = repo
        .create_comment(CreateCommentParams {
            course_id: course.id,
            lesson_id: Some(lesson.id),
            user_id: user.id,
            content: "About this lesson".to_string(),
        })
        .await?;

    assert_eq!(repo.get_comments(course.id, None).await?.len(), 2);

    let filtered = repo.get_comments(course.id, Some(lesson.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, on_lesson.id);

    Ok(())
}

/// Tests counting a user's posts.
///
/// Expected: comment and reply counts per author
#[tokio::test]
async fn counts_posts_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let author = factory::create_user(db).await?;
    let helper = factory::create_user(db).await?;

    let comment = factory::forum::create_comment(db, course.id, author.id).await?;
    factory::forum::create_comment(db, course.id, author.id).await?;
    factory::forum::create_reply(db, comment.id, helper.id).await?;

    let repo = ForumRepository::new(db);

    assert_eq!(repo.count_comments_by_user(author.id).await?, 2);
    assert_eq!(repo.count_replies_by_user(author.id).await?, 0);
    assert_eq!(repo.count_replies_by_user(helper.id).await?, 1);

    Ok(())
}
