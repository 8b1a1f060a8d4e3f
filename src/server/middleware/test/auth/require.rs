use super::*;

/// Tests that a first request provisions the user from the token.
///
/// Expected: Ok(User) persisted with the claim's identity fields
#[tokio::test]
async fn provisions_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = headers_for("auth|new", "learner");

    let user = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(user.external_id, "auth|new");
    assert_eq!(user.role, UserRole::Learner);
    let stored = UserRepository::new(db).find_by_external_id("auth|new").await?;
    assert_eq!(stored.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that the role is refreshed from the claim for an existing user.
///
/// Expected: Ok(User) with the same id and the new role
#[tokio::test]
async fn refreshes_role_from_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::user::UserFactory::new(db)
        .external_id("auth|42")
        .build()
        .await?;
    let keys = JwtKeys::new(SECRET);
    let headers = headers_for("auth|42", "Instructor");

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Instructor])
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.role, UserRole::Instructor);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new("a-completely-different-secret");
    let headers = headers_for("auth|1", "learner");

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token whose role claim is not recognised.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = headers_for("auth|1", "superuser");

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a learner is denied admin and instructor permissions.
///
/// Expected: Err(AuthError::AccessDenied) for both
#[tokio::test]
async fn denies_learner_elevated_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = headers_for("auth|learner", "learner");
    let guard = AuthGuard::new(db, &keys, &headers);

    let admin = guard.require(&[Permission::Admin]).await;
    let instructor = guard.require(&[Permission::Instructor]).await;

    assert!(matches!(
        admin,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        instructor,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that an admin passes instructor checks as well.
///
/// Expected: Ok(User) for both permissions
#[tokio::test]
async fn admin_passes_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = headers_for("auth|admin", "admin");

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Admin, Permission::Instructor])
        .await?;

    assert!(user.is_admin());

    Ok(())
}
