use super::*;

/// Tests that course points follow lesson changes.
///
/// Expected: average of lesson points after create and delete
#[tokio::test]
async fn follows_lesson_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::create_instructor(db).await?;
    let course = factory::create_course(db, instructor.id).await?;
    let user = as_user(&instructor);

    let lessons = LessonService::new(db);
    let first = lessons
        .create(
            &user,
            CreateLessonParams {
                course_id: course.id,
                title: "Ownership".to_string(),
                content: String::new(),
                position: None,
                points: 10,
            },
        )
        .await?;
    lessons
        .create(
            &user,
            CreateLessonParams {
                course_id: course.id,
                title: "Borrowing".to_string(),
                content: String::new(),
                position: None,
                points: 21,
            },
        )
        .await?;

    let courses = CourseService::new(db);
    assert_eq!(courses.find(course.id).await?.points, 16);

    lessons
        .delete(&MemoryStorage::default(), &user, first.id)
        .await?;
    assert_eq!(courses.find(course.id).await?.points, 21);

    Ok(())
}
