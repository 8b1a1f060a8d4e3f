use super::*;

/// Tests updating the editable profile fields.
///
/// Expected: Ok(User) with new name, headline and bio
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            full_name: "Grace Hopper".to_string(),
            headline: Some("Rear admiral".to_string()),
            bio: Some("Wrote the first compiler".to_string()),
        })
        .await?;

    assert_eq!(updated.full_name, "Grace Hopper");
    assert_eq!(updated.headline.as_deref(), Some("Rear admiral"));
    assert_eq!(updated.bio.as_deref(), Some("Wrote the first compiler"));
    assert_eq!(updated.external_id, user.external_id);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(UpdateProfileParams {
            user_id: 999,
            full_name: "Nobody".to_string(),
            headline: None,
            bio: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
