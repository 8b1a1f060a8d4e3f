//! Forum comment and reply domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::forum::{AuthorDto, CommentDto, ReplyDto},
    server::model::user::User,
};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: i32,
    pub full_name: String,
    pub avatar_url: Option<String>,
}

impl Author {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }

    /// Placeholder for rows whose author could not be loaded.
    pub fn unknown(id: i32) -> Self {
        Self {
            id,
            full_name: "Unknown user".to_string(),
            avatar_url: None,
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub id: i32,
    pub comment_id: i32,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn from_entity(entity: entity::forum_reply::Model, author: Author) -> Self {
        Self {
            id: entity.id,
            comment_id: entity.comment_id,
            author,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            comment_id: self.comment_id,
            author: self.author.into_dto(),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Comment with its replies, oldest reply first.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub course_id: i32,
    pub lesson_id: Option<i32>,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn from_entity(entity: entity::forum_comment::Model, author: Author, replies: Vec<Reply>) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            lesson_id: entity.lesson_id,
            author,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            replies,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            course_id: self.course_id,
            lesson_id: self.lesson_id,
            author: self.author.into_dto(),
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            replies: self.replies.into_iter().map(Reply::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub course_id: i32,
    pub lesson_id: Option<i32>,
    pub user_id: i32,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CreateReplyParams {
    pub comment_id: i32,
    pub user_id: i32,
    pub content: String,
}
