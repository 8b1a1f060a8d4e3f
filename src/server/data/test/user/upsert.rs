use super::*;

fn params(external_id: &str, name: &str, role: UserRole) -> UpsertUserParams {
    UpsertUserParams {
        external_id: external_id.to_string(),
        email: format!("{}@example.com", external_id),
        full_name: name.to_string(),
        role,
    }
}

/// Tests creating a user from token identity fields.
///
/// Expected: Ok(User) with the given identity and empty profile fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(params("sub-1", "Ada Lovelace", UserRole::Learner))
        .await?;

    assert_eq!(user.external_id, "sub-1");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.role, UserRole::Learner);
    assert!(user.headline.is_none());

    Ok(())
}

/// Tests that a second upsert with the same subject updates instead of inserting.
///
/// Verifies the name, email and role are refreshed while the id stays the same.
///
/// Expected: Ok(User) with the same id and updated identity fields
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert(params("sub-1", "Ada", UserRole::Learner))
        .await?;
    let second = repo
        .upsert(params("sub-1", "Ada L.", UserRole::Instructor))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.full_name, "Ada L.");
    assert_eq!(second.role, UserRole::Instructor);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that an upsert leaves profile fields untouched.
///
/// Expected: Ok(User) keeping the headline set through the profile update
#[tokio::test]
async fn preserves_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(params("sub-1", "Ada", UserRole::Learner))
        .await?;
    repo.update_profile(UpdateProfileParams {
        user_id: user.id,
        full_name: "Ada".to_string(),
        headline: Some("Engineer".to_string()),
        bio: None,
    })
    .await?;

    let refreshed = repo
        .upsert(params("sub-1", "Ada", UserRole::Learner))
        .await?;

    assert_eq!(refreshed.headline.as_deref(), Some("Engineer"));

    Ok(())
}
