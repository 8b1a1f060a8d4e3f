use super::*;

/// Tests requesting a certificate before finishing the course.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn requires_full_completion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (_, course, _) = factory::helpers::create_course_with_documents(db, 2).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;

    let result = CertificateService::new(db)
        .generate(&storage, learner.id, course.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(storage.keys().is_empty());

    Ok(())
}

/// Tests that generating twice returns the same certificate.
///
/// Expected: same id and number, one stored file
#[tokio::test]
async fn generation_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (_, course, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;
    ProgressService::new(db)
        .complete_document(&storage, &as_user(&learner), documents[0].id)
        .await?;

    let service = CertificateService::new(db);
    let first = service.generate(&storage, learner.id, course.id).await?;
    let second = service.generate(&storage, learner.id, course.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.certificate_number, second.certificate_number);
    assert_eq!(storage.keys().len(), 1);
    assert_eq!(first.learner_name, learner.full_name);
    assert_eq!(first.course_title, course.title);

    Ok(())
}

/// Tests looking a certificate up by number.
///
/// Expected: the issued certificate, and NotFound for an unknown number
#[tokio::test]
async fn finds_by_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::default();

    let (_, course, documents) = factory::helpers::create_course_with_documents(db, 1).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;
    ProgressService::new(db)
        .complete_document(&storage, &as_user(&learner), documents[0].id)
        .await?;

    let service = CertificateService::new(db);
    let issued = service.list_mine(learner.id).await?;
    assert_eq!(issued.len(), 1);

    let found = service.get_by_number(&issued[0].certificate_number).await?;
    assert_eq!(found.id, issued[0].id);

    let missing = service.get_by_number("CH-MISSING").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
