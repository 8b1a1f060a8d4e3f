use super::*;

/// Tests marking another user's notification as read.
///
/// Expected: Err(NotFound) and the notification stays unread
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(other.id, notification.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.unread_count(owner.id).await?, 1);

    Ok(())
}

/// Tests marking one's own notification as read.
///
/// Expected: unread count drops to 0
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let read = service.mark_read(owner.id, notification.id).await?;

    assert!(read.is_read);
    assert_eq!(service.unread_count(owner.id).await?, 0);

    Ok(())
}
