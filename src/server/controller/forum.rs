use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        forum::{CommentDto, CreateCommentDto, CreateReplyDto, ReplyDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::forum::CreateCommentParams,
        service::forum::ForumService,
        state::AppState,
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

#[derive(Deserialize)]
pub struct CommentFilterParams {
    pub lesson_id: Option<i32>,
}

/// List a course's discussion.
///
/// Comments come newest first, each with its replies oldest first.
#[utoipa::path(
    get,
    path = "/api/courses/{id}/comments",
    tag = FORUM_TAG,
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("lesson_id" = Option<i32>, Query, description = "Only comments on this lesson")
    ),
    responses(
        (status = 200, description = "Comments with replies", body = Vec<CommentDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<CommentFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let comments = ForumService::new(&state.db)
        .list(id, params.lesson_id, viewer.as_ref())
        .await?;
    let dtos: Vec<_> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Post a comment on a course.
///
/// # Access Control
/// - Learners enrolled in the course, its instructor, and admins
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Empty content or a lesson from another course
/// - `403 Forbidden` - Caller is not a participant of the course
/// - `404 Not Found` - Course or lesson not found
#[utoipa::path(
    post,
    path = "/api/courses/{id}/comments",
    tag = FORUM_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Created comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Course or lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comment = ForumService::new(&state.db)
        .create_comment(
            &user,
            CreateCommentParams {
                course_id: id,
                lesson_id: payload.lesson_id,
                user_id: user.id,
                content: payload.content,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit the caller's own comment.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = FORUM_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comment = ForumService::new(&state.db)
        .update_comment(&user, id, &payload.content)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Reply to a comment. The comment's author is notified unless replying to themselves.
#[utoipa::path(
    post,
    path = "/api/comments/{id}/replies",
    tag = FORUM_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Created reply", body = ReplyDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let reply = ForumService::new(&state.db)
        .create_reply(&user, id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = FORUM_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment and its replies deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is neither author nor admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    ForumService::new(&state.db).delete_comment(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/replies/{id}",
    tag = FORUM_TAG,
    params(("id" = i32, Path, description = "Reply ID")),
    responses(
        (status = 204, description = "Reply deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is neither author nor admin", body = ErrorDto),
        (status = 404, description = "Reply not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    ForumService::new(&state.db).delete_reply(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
