use super::*;

/// Tests skills and completed courses on the CV.
///
/// Expected: only completed courses listed newest first, skills distinct and sorted
#[tokio::test]
async fn lists_completed_courses_and_skills() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let older = factory::course::CourseFactory::new(db, instructor.id)
        .title("Async Rust")
        .published()
        .build()
        .await?;
    let newer = factory::course::CourseFactory::new(db, instructor.id)
        .title("Web Services")
        .published()
        .build()
        .await?;
    let unfinished = factory::course::CourseFactory::new(db, instructor.id)
        .published()
        .build()
        .await?;

    let rust = factory::category::create_technology(db, "Rust").await?;
    let tokio = factory::category::create_technology(db, "Tokio").await?;
    let sql = factory::category::create_technology(db, "SQL").await?;
    factory::category::link_technology(db, older.id, tokio.id).await?;
    factory::category::link_technology(db, older.id, rust.id).await?;
    factory::category::link_technology(db, newer.id, rust.id).await?;
    factory::category::link_technology(db, unfinished.id, sql.id).await?;

    let learner = factory::create_user(db).await?;
    factory::enrollment::EnrollmentFactory::new(db, learner.id, older.id)
        .completed_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    factory::enrollment::EnrollmentFactory::new(db, learner.id, newer.id)
        .completed_at(Utc::now())
        .build()
        .await?;
    factory::create_enrollment(db, learner.id, unfinished.id).await?;

    let cv = CvService::new(db).build(learner.id).await?;

    assert_eq!(cv.profile.id, learner.id);
    let titles: Vec<&str> = cv.completed_courses.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Web Services", "Async Rust"]);
    assert_eq!(cv.skills, vec!["Rust".to_string(), "Tokio".to_string()]);
    assert!(cv.certificates.is_empty());
    assert!(cv.badges.is_empty());

    Ok(())
}

/// Tests the CV of a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CvService::new(db).build(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
