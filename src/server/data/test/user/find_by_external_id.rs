use super::*;

/// Tests finding a provisioned user by token subject.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .external_id("auth0|42")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_external_id("auth0|42").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests querying for an unknown subject.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_external_id("missing").await?.is_none());

    Ok(())
}
