use super::*;

/// Tests listing with a page number at the top of the range.
///
/// Expected: empty page, requested page echoed back, totals intact
#[tokio::test]
async fn huge_page_returns_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;

    let page = NotificationService::new(db)
        .list(user.id, u64::MAX, 20, false)
        .await?;

    assert!(page.notifications.is_empty());
    assert_eq!(page.page, u64::MAX);
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);

    Ok(())
}
