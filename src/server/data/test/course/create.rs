use super::*;

/// Tests creating a course with a category and technologies.
///
/// Verifies the course starts as a draft with zero points and that relations load
/// through `get_by_id`.
///
/// Expected: Ok(course) in Draft status with two technologies linked
#[tokio::test]
async fn creates_draft_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let category = factory::category::create_category(db).await?;
    let rust = factory::category::create_technology(db, "Rust").await?;
    let sql = factory::category::create_technology(db, "SQL").await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParams {
            instructor_id: instructor.id,
            title: "Systems programming".to_string(),
            description: "Ownership and borrowing".to_string(),
            category_id: Some(category.id),
            technology_ids: vec![rust.id, sql.id],
        })
        .await?;

    assert_eq!(course.status, CourseStatus::Draft);
    assert_eq!(course.points, 0);
    assert!(course.published_at.is_none());

    let loaded = repo.get_by_id(course.id).await?.unwrap();
    assert_eq!(loaded.instructor.map(|u| u.id), Some(instructor.id));
    assert_eq!(loaded.category.map(|c| c.id), Some(category.id));
    assert_eq!(loaded.technologies.len(), 2);
    assert_eq!(loaded.lesson_count, 0);

    Ok(())
}

/// Tests that updating technologies replaces the previous links.
///
/// Expected: Ok(()) with only the new technology linked
#[tokio::test]
async fn set_technologies_replaces_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let old = factory::category::create_technology(db, "Go").await?;
    let new = factory::category::create_technology(db, "Rust").await?;
    factory::category::link_technology(db, course.id, old.id).await?;

    let repo = CourseRepository::new(db);
    repo.set_technologies(course.id, vec![new.id]).await?;

    let technologies = repo.get_technologies_for_courses(vec![course.id]).await?;
    assert_eq!(technologies.len(), 1);
    assert_eq!(technologies[0].1.name, "Rust");

    Ok(())
}
