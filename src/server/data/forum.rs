//! Forum data repository.
//!
//! Comments belong to a course and optionally to one of its lessons. Replies hang off a
//! single comment and are removed with it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::forum::{CreateCommentParams, CreateReplyParams};

pub struct ForumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_comment(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::forum_comment::Model, DbErr> {
        let now = Utc::now();
        entity::forum_comment::ActiveModel {
            course_id: ActiveValue::Set(params.course_id),
            lesson_id: ActiveValue::Set(params.lesson_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_comment(&self, id: i32) -> Result<Option<entity::forum_comment::Model>, DbErr> {
        entity::prelude::ForumComment::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets comments of a course, newest first.
    ///
    /// When `lesson_id` is provided only comments attached to that lesson are returned.
    pub async fn get_comments(
        &self,
        course_id: i32,
        lesson_id: Option<i32>,
    ) -> Result<Vec<entity::forum_comment::Model>, DbErr> {
        let mut query = entity::prelude::ForumComment::find()
            .filter(entity::forum_comment::Column::CourseId.eq(course_id));

        if let Some(lesson_id) = lesson_id {
            query = query.filter(entity::forum_comment::Column::LessonId.eq(lesson_id));
        }

        query
            .order_by_desc(entity::forum_comment::Column::CreatedAt)
            .order_by_desc(entity::forum_comment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_comment(
        &self,
        id: i32,
        content: String,
    ) -> Result<entity::forum_comment::Model, DbErr> {
        entity::forum_comment::ActiveModel {
            id: ActiveValue::Unchanged(id),
            content: ActiveValue::Set(content),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a comment along with its replies.
    pub async fn delete_comment(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ForumReply::delete_many()
            .filter(entity::forum_reply::Column::CommentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::ForumComment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn create_reply(
        &self,
        params: CreateReplyParams,
    ) -> Result<entity::forum_reply::Model, DbErr> {
        entity::forum_reply::ActiveModel {
            comment_id: ActiveValue::Set(params.comment_id),
            user_id: ActiveValue::Set(params.user_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_reply(&self, id: i32) -> Result<Option<entity::forum_reply::Model>, DbErr> {
        entity::prelude::ForumReply::find_by_id(id).one(self.db).await
    }

    /// Gets the replies of the given comments, oldest first.
    pub async fn get_replies(
        &self,
        comment_ids: Vec<i32>,
    ) -> Result<Vec<entity::forum_reply::Model>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ForumReply::find()
            .filter(entity::forum_reply::Column::CommentId.is_in(comment_ids))
            .order_by_asc(entity::forum_reply::Column::CreatedAt)
            .order_by_asc(entity::forum_reply::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_reply(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ForumReply::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count_comments_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ForumComment::find()
            .filter(entity::forum_comment::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn count_replies_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ForumReply::find()
            .filter(entity::forum_reply::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
