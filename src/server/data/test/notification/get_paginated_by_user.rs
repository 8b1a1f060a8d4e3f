use super::*;

/// Tests that notifications are returned newest first and paged.
///
/// Expected: first page holds the two newest, total counts all three
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = factory::notification::create_notification_at(db, user.id, now - Duration::hours(2)).await?;
    let middle = factory::notification::create_notification_at(db, user.id, now - Duration::hours(1)).await?;
    let newest = factory::notification::create_notification_at(db, user.id, now).await?;

    let repo = NotificationRepository::new(db);
    let (page, total) = repo.get_paginated_by_user(user.id, 0, 2, false).await?;
    let (rest, _) = repo.get_paginated_by_user(user.id, 1, 2, false).await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = page.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert_eq!(rest[0].id, oldest.id);

    Ok(())
}

/// Tests that other users' notifications and read ones can be excluded.
///
/// Expected: only the user's unread notification is returned
#[tokio::test]
async fn filters_by_user_and_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let read = factory::notification::create_notification(db, user.id).await?;
    let unread = factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_read(read.id).await?;

    let (notifications, total) = repo.get_paginated_by_user(user.id, 0, 10, true).await?;

    assert_eq!(total, 1);
    assert_eq!(notifications[0].id, unread.id);

    Ok(())
}

/// Tests requesting a page far past the last notification.
///
/// Expected: Ok with an empty page and the full total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let (page, total) = repo.get_paginated_by_user(user.id, 1, 20, false).await?;
    let (huge, _) = repo
        .get_paginated_by_user(user.id, u64::MAX, 20, false)
        .await?;

    assert_eq!(total, 1);
    assert!(page.is_empty());
    assert!(huge.is_empty());

    Ok(())
}
