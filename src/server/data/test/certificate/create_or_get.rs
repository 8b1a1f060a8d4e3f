use super::*;

/// Tests issuing a first certificate for a learner and course.
///
/// Expected: Ok((certificate, true)) with the given number
#[tokio::test]
async fn inserts_new_certificate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    add_user_course_index(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;

    let (stored, inserted) = CertificateRepository::new(db)
        .create_or_get(certificate(learner.id, course.id, "CH-100"))
        .await?;

    assert!(inserted);
    assert_eq!(stored.certificate_number, "CH-100");
    assert_eq!(stored.user_id, learner.id);

    Ok(())
}

/// Tests a second insert for the same learner and course.
///
/// Expected: Ok((first certificate, false)) and a single stored row
#[tokio::test]
async fn returns_existing_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    add_user_course_index(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let learner = factory::create_user(db).await?;

    let repo = CertificateRepository::new(db);
    let first = repo
        .create(certificate(learner.id, course.id, "CH-200"))
        .await?;
    let (stored, inserted) = repo
        .create_or_get(certificate(learner.id, course.id, "CH-201"))
        .await?;

    assert!(!inserted);
    assert_eq!(stored, first);
    assert_eq!(repo.get_by_user(learner.id).await?.len(), 1);

    Ok(())
}

/// Tests an insert failing for a reason other than an existing certificate.
///
/// Expected: Err(DbErr) from the duplicate certificate number
#[tokio::test]
async fn propagates_other_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    add_user_course_index(db).await?;

    let (_, course) = factory::helpers::create_published_course(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = CertificateRepository::new(db);
    repo.create(certificate(first.id, course.id, "CH-300"))
        .await?;
    let result = repo
        .create_or_get(certificate(second.id, course.id, "CH-300"))
        .await;

    assert!(result.is_err());

    Ok(())
}
