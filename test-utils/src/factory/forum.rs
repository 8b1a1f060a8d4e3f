//! Factories for forum comments and replies.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a course-level comment by `user_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    course_id: i32,
    user_id: i32,
) -> Result<entity::forum_comment::Model, DbErr> {
    let now = Utc::now();
    entity::forum_comment::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        lesson_id: ActiveValue::Set(None),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a reply by `user_id` to `comment_id`.
pub async fn create_reply(
    db: &DatabaseConnection,
    comment_id: i32,
    user_id: i32,
) -> Result<entity::forum_reply::Model, DbErr> {
    entity::forum_reply::ActiveModel {
        comment_id: ActiveValue::Set(comment_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(format!("Reply {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
