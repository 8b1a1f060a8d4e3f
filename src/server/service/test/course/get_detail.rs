use super::*;

/// Tests that drafts are hidden from anyone but their managers.
///
/// Expected: NotFound for a learner and anonymous viewer, Ok for instructor and admin
#[tokio::test]
async fn drafts_visible_to_managers_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let learner = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = CourseService::new(db);

    let anonymous = service.get_detail(course.id, None).await;
    assert!(matches!(anonymous, Err(AppError::NotFound(_))));
    let as_learner = service.get_detail(course.id, Some(&as_user(&learner))).await;
    assert!(matches!(as_learner, Err(AppError::NotFound(_))));

    service
        .get_detail(course.id, Some(&as_user(&instructor)))
        .await?;
    service.get_detail(course.id, Some(&as_user(&admin))).await?;

    Ok(())
}

/// Tests that the public catalog only lists published courses.
///
/// Expected: one published course of two
#[tokio::test]
async fn catalog_lists_published_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, published) = factory::helpers::create_published_course(db).await?;
    factory::create_course(db, instructor.id).await?;

    let page = CourseService::new(db)
        .list_published(CourseFilter {
            page: 0,
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.courses[0].id, published.id);
    assert_eq!(page.total_pages, 1);

    Ok(())
}
