//! Course discussion forum.
//!
//! Anyone who can see a course can read its comments. Posting requires an enrollment
//! or the right to manage the course; only authors and admins delete.

use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{enrollment::EnrollmentRepository, forum::ForumRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        course::can_manage,
        forum::{Author, Comment, CreateCommentParams, CreateReplyParams, Reply},
        notification::NewNotification,
        user::User,
    },
    service::{
        badge::BadgeService, course::CourseService, lesson::LessonService,
        notification::NotificationService,
    },
};

pub struct ForumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a course's comments newest first, each with its replies oldest first.
    ///
    /// Passing a `lesson_id` narrows the list to that lesson's discussion.
    pub async fn list(
        &self,
        course_id: i32,
        lesson_id: Option<i32>,
        viewer: Option<&User>,
    ) -> Result<Vec<Comment>, AppError> {
        CourseService::new(self.db)
            .require_visible(course_id, viewer)
            .await?;

        let repo = ForumRepository::new(self.db);
        let comments = repo.get_comments(course_id, lesson_id).await?;
        let replies = repo
            .get_replies(comments.iter().map(|c| c.id).collect())
            .await?;

        let mut author_ids: Vec<i32> = comments
            .iter()
            .map(|c| c.user_id)
            .chain(replies.iter().map(|r| r.user_id))
            .collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors = self.authors(author_ids).await?;
        let author = |id: i32| authors.get(&id).cloned().unwrap_or_else(|| Author::unknown(id));

        let mut replies_by_comment: HashMap<i32, Vec<Reply>> = HashMap::new();
        for reply in replies {
            let reply_author = author(reply.user_id);
            replies_by_comment
                .entry(reply.comment_id)
                .or_default()
                .push(Reply::from_entity(reply, reply_author));
        }

        Ok(comments
            .into_iter()
            .map(|comment| {
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                let comment_author = author(comment.user_id);
                Comment::from_entity(comment, comment_author, replies)
            })
            .collect())
    }

    /// Posts a comment on a course, optionally attached to one of its lessons
    ///
    /// # Returns
    /// - `Ok(Comment)` - The new comment without replies
    /// - `Err(AppError::BadRequest)` - Empty content or a lesson from another course
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller neither enrolled nor managing the course
    pub async fn create_comment(
        &self,
        user: &User,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        let content = require_content(&params.content)?;
        self.require_participant(user, params.course_id).await?;

        if let Some(lesson_id) = params.lesson_id {
            let lesson = LessonService::new(self.db).find_lesson(lesson_id).await?;
            if lesson.course_id != params.course_id {
                return Err(AppError::BadRequest(
                    "Lesson does not belong to this course".to_string(),
                ));
            }
        }

        let comment = ForumRepository::new(self.db)
            .create_comment(CreateCommentParams {
                content,
                user_id: user.id,
                ..params
            })
            .await?;

        BadgeService::new(self.db).evaluate(user.id).await?;

        Ok(Comment::from_entity(comment, Author::from_user(user), Vec::new()))
    }

    /// Edits the caller's own comment
    pub async fn update_comment(
        &self,
        user: &User,
        id: i32,
        content: &str,
    ) -> Result<Comment, AppError> {
        let content = require_content(content)?;
        let repo = ForumRepository::new(self.db);
        let comment = self.find_comment(id).await?;

        if comment.user_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to edit comment {} of user {}", id, comment.user_id),
            )
            .into());
        }

        let comment = repo.update_comment(id, content).await?;
        let replies = self.replies_of(id).await?;

        Ok(Comment::from_entity(comment, Author::from_user(user), replies))
    }

    /// Replies to a comment and notifies its author unless they reply to themselves
    pub async fn create_reply(
        &self,
        user: &User,
        comment_id: i32,
        content: &str,
    ) -> Result<Reply, AppError> {
        let content = require_content(content)?;
        let comment = self.find_comment(comment_id).await?;
        self.require_participant(user, comment.course_id).await?;

        let reply = ForumRepository::new(self.db)
            .create_reply(CreateReplyParams {
                comment_id,
                user_id: user.id,
                content,
            })
            .await?;

        if comment.user_id != user.id {
            NotificationService::new(self.db)
                .notify(NewNotification {
                    user_id: comment.user_id,
                    kind: NotificationKind::ForumReply,
                    title: "New reply".to_string(),
                    message: format!("{} replied to your comment", user.full_name),
                    link: Some(format!("/courses/{}/comments#{}", comment.course_id, comment_id)),
                })
                .await?;
        }

        BadgeService::new(self.db).evaluate(user.id).await?;

        Ok(Reply::from_entity(reply, Author::from_user(user)))
    }

    /// Deletes a comment and its replies
    pub async fn delete_comment(&self, user: &User, id: i32) -> Result<(), AppError> {
        let comment = self.find_comment(id).await?;
        require_author(user, comment.user_id, "comment", id)?;

        ForumRepository::new(self.db).delete_comment(id).await?;

        Ok(())
    }

    pub async fn delete_reply(&self, user: &User, id: i32) -> Result<(), AppError> {
        let repo = ForumRepository::new(self.db);
        let reply = repo
            .find_reply(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?;
        require_author(user, reply.user_id, "reply", id)?;

        repo.delete_reply(id).await?;

        Ok(())
    }

    async fn find_comment(&self, id: i32) -> Result<entity::forum_comment::Model, AppError> {
        ForumRepository::new(self.db)
            .find_comment(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    async fn replies_of(&self, comment_id: i32) -> Result<Vec<Reply>, AppError> {
        let replies = ForumRepository::new(self.db)
            .get_replies(vec![comment_id])
            .await?;
        let authors = self
            .authors(replies.iter().map(|r| r.user_id).collect())
            .await?;

        Ok(replies
            .into_iter()
            .map(|r| {
                let author = authors
                    .get(&r.user_id)
                    .cloned()
                    .unwrap_or_else(|| Author::unknown(r.user_id));
                Reply::from_entity(r, author)
            })
            .collect())
    }

    async fn authors(&self, ids: Vec<i32>) -> Result<HashMap<i32, Author>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_by_ids(ids)
            .await?
            .iter()
            .map(|u| (u.id, Author::from_user(u)))
            .collect())
    }

    /// Enrolled learners and course managers may post.
    async fn require_participant(&self, user: &User, course_id: i32) -> Result<(), AppError> {
        let course = CourseService::new(self.db)
            .require_visible(course_id, Some(user))
            .await?;
        if can_manage(&course, user) {
            return Ok(());
        }

        if EnrollmentRepository::new(self.db)
            .find(user.id, course_id)
            .await?
            .is_none()
        {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to post in course {} without enrolling", course_id),
            )
            .into());
        }

        Ok(())
    }
}

fn require_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    Ok(content.to_string())
}

fn require_author(user: &User, author_id: i32, kind: &str, id: i32) -> Result<(), AppError> {
    if user.is_admin() || user.id == author_id {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("User attempted to delete {} {} of user {}", kind, id, author_id),
    )
    .into())
}
