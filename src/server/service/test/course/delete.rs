use super::*;

/// Tests that deleting a course removes every file stored for it.
///
/// Expected: thumbnail, document and certificate files gone, unrelated file kept
#[tokio::test]
async fn removes_stored_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let instructor = as_user(&instructor);
    let lesson = factory::create_lesson(db, course.id).await?;
    let learner = factory::create_user(db).await?;
    let storage = MemoryStorage::default();
    storage
        .save("avatars/unrelated.png", b"png", "image/png")
        .await?;

    let courses = CourseService::new(db);
    courses
        .set_thumbnail(
            &storage,
            &instructor,
            course.id,
            Upload {
                file_name: "cover.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: b"png".to_vec(),
                title: None,
            },
        )
        .await?;
    LessonService::new(db)
        .add_document(
            &storage,
            &instructor,
            lesson.id,
            Upload {
                file_name: "notes.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: b"%PDF-1.4".to_vec(),
                title: None,
            },
        )
        .await?;
    let file_url = storage
        .save("certificates/CH-1.html", b"<html></html>", "text/html")
        .await?;
    CertificateRepository::new(db)
        .create(NewCertificate {
            user_id: learner.id,
            course_id: course.id,
            certificate_number: "CH-1".to_string(),
            file_key: "certificates/CH-1.html".to_string(),
            file_url,
        })
        .await?;
    assert_eq!(storage.keys().len(), 4);

    courses.delete(&storage, &instructor, course.id).await?;

    assert_eq!(storage.keys(), vec!["avatars/unrelated.png".to_string()]);
    assert!(matches!(
        courses.find(course.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting another instructor's course.
///
/// Expected: Err(AccessDenied) and stored files untouched
#[tokio::test]
async fn rejects_other_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let other = factory::create_instructor(db).await?;
    let storage = MemoryStorage::default();
    storage.save("thumbnails/keep.png", b"png", "image/png").await?;

    let result = CourseService::new(db)
        .delete(&storage, &as_user(&other), course.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(storage.keys().len(), 1);

    Ok(())
}
