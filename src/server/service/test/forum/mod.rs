use entity::sea_orm_active_enums::NotificationKind;

use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::forum::CreateCommentParams,
    service::{forum::ForumService, test::as_user},
};
use test_utils::{builder::TestBuilder, factory};

mod create_comment;
mod create_reply;
mod delete_comment;

fn comment(course_id: i32, content: &str) -> CreateCommentParams {
    CreateCommentParams {
        course_id,
        lesson_id: None,
        user_id: 0,
        content: content.to_string(),
    }
}
