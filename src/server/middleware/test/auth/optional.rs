use super::*;

/// Tests an anonymous request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_request_yields_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = HeaderMap::new();

    let user = AuthGuard::new(db, &keys, &headers).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a present token is still validated.
///
/// Expected: Ok(Some(User)) for a valid token, Err for an invalid one
#[tokio::test]
async fn validates_present_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let valid = headers_for("auth|7", "learner");
    let user = AuthGuard::new(db, &keys, &valid).optional().await?;
    assert!(user.is_some());

    let mut invalid = HeaderMap::new();
    invalid.insert(AUTHORIZATION, HeaderValue::from_static("Bearer nope"));
    let result = AuthGuard::new(db, &keys, &invalid).optional().await;
    assert!(result.is_err());

    Ok(())
}
