use super::*;

/// Tests unlocking then claiming a badge.
///
/// Expected: unlock row without claim, then a claim time after claiming
#[tokio::test]
async fn unlock_then_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let badges = factory::badge::seed_badges(db).await?;
    let badge = factory::badge::find(&badges, "first_steps").unwrap();
    let user = factory::create_user(db).await?;

    let repo = BadgeRepository::new(db);
    let (unlocked, inserted) = repo.unlock(user.id, badge.id, Utc::now()).await?;
    assert!(inserted);
    assert!(unlocked.claimed_at.is_none());
    assert!(repo.get_all_claimed().await?.is_empty());

    repo.claim(user.id, badge.id, Utc::now()).await?;

    let stored = repo.find_user_badge(user.id, badge.id).await?.unwrap();
    assert!(stored.claimed_at.is_some());
    assert_eq!(repo.get_all_claimed().await?.len(), 1);

    Ok(())
}

/// Tests that the catalog is returned in id order.
///
/// Expected: every seeded badge, first_steps first
#[tokio::test]
async fn lists_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::badge::seed_badges(db).await?;

    let repo = BadgeRepository::new(db);
    let badges = repo.get_all().await?;

    assert_eq!(badges.len(), factory::badge::CATALOG.len());
    assert_eq!(badges[0].code, "first_steps");

    Ok(())
}

/// Tests recording the same unlock twice.
///
/// Expected: Ok both times, the second call returns the first row without inserting
#[tokio::test]
async fn repeated_unlock_keeps_first_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let badges = factory::badge::seed_badges(db).await?;
    let badge = factory::badge::find(&badges, "first_steps").unwrap();
    let user = factory::create_user(db).await?;

    let repo = BadgeRepository::new(db);
    let first_at = Utc::now() - Duration::hours(1);
    let (first, first_inserted) = repo.unlock(user.id, badge.id, first_at).await?;
    let (second, second_inserted) = repo.unlock(user.id, badge.id, Utc::now()).await?;

    assert!(first_inserted);
    assert!(!second_inserted);
    assert_eq!(second, first);
    assert_eq!(repo.get_user_badges(user.id).await?.len(), 1);

    Ok(())
}
