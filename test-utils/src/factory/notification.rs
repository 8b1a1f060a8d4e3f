//! Notification factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification for `user_id` created at `created_at`.
pub async fn create_notification_at(
    db: &DatabaseConnection,
    user_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set(NotificationKind::Enrollment),
        title: ActiveValue::Set("Welcome".to_string()),
        message: ActiveValue::Set("You enrolled in a course".to_string()),
        link: ActiveValue::Set(None),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unread notification for `user_id` created now.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    create_notification_at(db, user_id, Utc::now()).await
}
