use super::*;

/// Tests attaching a document as the course instructor.
///
/// Expected: file stored under documents/, title defaults to the file name
#[tokio::test]
async fn instructor_adds_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let storage = MemoryStorage::default();

    let document = LessonService::new(db)
        .add_document(&storage, &as_user(&instructor), lesson.id, pdf("notes.pdf", None))
        .await?;

    assert_eq!(document.lesson_id, lesson.id);
    assert_eq!(document.title, "notes.pdf");
    assert!(document.file_key.starts_with("documents/"));
    assert_eq!(storage.keys(), vec![document.file_key.clone()]);
    assert_eq!(
        storage.content_type(&document.file_key).as_deref(),
        Some("application/pdf")
    );

    Ok(())
}

/// Tests attaching a document to another instructor's lesson.
///
/// Expected: Err(AccessDenied) and nothing stored
#[tokio::test]
async fn rejects_other_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let other = factory::create_instructor(db).await?;
    let storage = MemoryStorage::default();

    let result = LessonService::new(db)
        .add_document(&storage, &as_user(&other), lesson.id, pdf("notes.pdf", Some("Notes")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(storage.keys().is_empty());

    Ok(())
}

/// Tests deleting a document.
///
/// Expected: row and stored file removed
#[tokio::test]
async fn deletes_document_and_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let storage = MemoryStorage::default();
    let instructor = as_user(&instructor);

    let service = LessonService::new(db);
    let document = service
        .add_document(&storage, &instructor, lesson.id, pdf("slides.pdf", Some("Slides")))
        .await?;
    assert_eq!(document.title, "Slides");

    service
        .delete_document(&storage, &instructor, document.id)
        .await?;

    assert!(storage.keys().is_empty());
    let result = service
        .delete_document(&storage, &instructor, document.id)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting a lesson removes its document files.
///
/// Expected: no stored files left once the lesson is gone
#[tokio::test]
async fn lesson_delete_removes_document_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let storage = MemoryStorage::default();
    let instructor = as_user(&instructor);

    let service = LessonService::new(db);
    service
        .add_document(&storage, &instructor, lesson.id, pdf("slides.pdf", None))
        .await?;
    service
        .add_document(&storage, &instructor, lesson.id, pdf("notes.pdf", None))
        .await?;
    assert_eq!(storage.keys().len(), 2);

    service.delete(&storage, &instructor, lesson.id).await?;

    assert!(storage.keys().is_empty());
    assert!(matches!(
        service.find_lesson(lesson.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests attaching an HTML page declared as a PDF.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_html_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let storage = MemoryStorage::default();

    let result = LessonService::new(db)
        .add_document(&storage, &as_user(&instructor), lesson.id, pdf("slides.html", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(storage.keys().is_empty());

    Ok(())
}

/// Tests that the stored content type follows the file extension.
///
/// Expected: plain text stored as text/plain despite the declared type
#[tokio::test]
async fn stores_type_from_extension() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (instructor, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let storage = MemoryStorage::default();

    let document = LessonService::new(db)
        .add_document(&storage, &as_user(&instructor), lesson.id, pdf("Reading.TXT", None))
        .await?;

    assert_eq!(
        storage.content_type(&document.file_key).as_deref(),
        Some("text/plain")
    );

    Ok(())
}
