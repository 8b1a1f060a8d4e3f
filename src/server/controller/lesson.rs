use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UploadFormDto},
        lesson::{CreateLessonDto, DocumentDto, LessonDto, UpdateLessonDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::lesson::{CreateLessonParams, UpdateLessonParams},
        service::lesson::LessonService,
        state::AppState,
        util::upload::read_upload,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// List a course's lessons in position order, with documents and quiz ids.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/lessons",
    tag = LESSON_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Lessons of the course", body = Vec<LessonDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_lessons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let lessons = LessonService::new(&state.db)
        .list(course_id, viewer.as_ref())
        .await?;
    let dtos: Vec<_> = lessons.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a lesson to a course.
///
/// The lesson is appended after the last one when no position is given, and the
/// course's points are recomputed from its lessons.
///
/// # Access Control
/// - The course's instructor or an admin
///
/// # Returns
/// - `201 Created` - The new lesson
/// - `400 Bad Request` - Missing title or negative points
/// - `403 Forbidden` - Caller does not manage the course
/// - `404 Not Found` - Course not found
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/lessons",
    tag = LESSON_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Created lesson", body = LessonDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateLessonParams::from_dto(course_id, payload);
    let lesson = LessonService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson with rendered content", body = LessonDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let lesson = LessonService::new(&state.db)
        .get(id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Updated lesson", body = LessonDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = UpdateLessonParams::from_dto(id, payload);
    let lesson = LessonService::new(&state.db).update(&user, params).await?;

    Ok((StatusCode::OK, Json(lesson.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    LessonService::new(&state.db)
        .delete(state.storage.as_ref(), &user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a document to a lesson.
///
/// Expects a multipart form with a `file` part and an optional `title` part; the
/// title defaults to the file name.
#[utoipa::path(
    post,
    path = "/api/lessons/{id}/documents",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Stored document", body = DocumentDto),
        (status = 400, description = "Missing, empty or oversized file", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let upload = read_upload(multipart).await?;
    let document = LessonService::new(&state.db)
        .add_document(state.storage.as_ref(), &user, id, upload)
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// Delete a document and its stored file.
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = LESSON_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    LessonService::new(&state.db)
        .delete_document(state.storage.as_ref(), &user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
