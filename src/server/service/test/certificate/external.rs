use super::*;

fn params(user_id: i32, credential_url: Option<&str>) -> ExternalCertificateParams {
    ExternalCertificateParams {
        user_id,
        title: "Kubernetes Administrator".to_string(),
        issuer: "CNCF".to_string(),
        issued_on: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        credential_url: credential_url.map(str::to_string),
    }
}

/// Tests creating an external certificate with a relative URL.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_relative_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CertificateService::new(db)
        .create_external(params(user.id, Some("certs/123")))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that users cannot modify each other's external certificates.
///
/// Expected: Err(NotFound) for update and delete by another user
#[tokio::test]
async fn only_owner_modifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let service = CertificateService::new(db);
    let created = service
        .create_external(params(owner.id, Some("https://example.com/c/1")))
        .await?;

    let update = service
        .update_external(created.id, params(other.id, None))
        .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = service.delete_external(other.id, created.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    service.delete_external(owner.id, created.id).await?;
    assert!(service.list_external(owner.id).await?.is_empty());

    Ok(())
}
