use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        enrollment::{CourseProgressDto, EnrollmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{enrollment::EnrollmentService, progress::ProgressService},
        state::AppState,
    },
};

/// Tag for grouping enrollment and progress endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Enroll the caller in a published course.
///
/// # Returns
/// - `201 Created` - The enrollment at its current progress
/// - `400 Bad Request` - Course is a draft or the caller is already enrolled
/// - `404 Not Found` - Course not found
#[utoipa::path(
    post,
    path = "/api/courses/{id}/enrollment",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 201, description = "Enrolled", body = EnrollmentDto),
        (status = 400, description = "Course not open or already enrolled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn enroll(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let enrollment = EnrollmentService::new(&state.db).enroll(&user, id).await?;

    Ok((StatusCode::CREATED, Json(enrollment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}/enrollment",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Unenrolled"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not enrolled in the course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unenroll(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    EnrollmentService::new(&state.db).unenroll(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the caller's enrollments with course titles and progress.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    tag = ENROLLMENT_TAG,
    responses(
        (status = 200, description = "Caller's enrollments", body = Vec<EnrollmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_enrollments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let enrollments = EnrollmentService::new(&state.db).list_mine(&user).await?;
    let dtos: Vec<_> = enrollments.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/progress",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Caller's progress through the course", body = CourseProgressDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found or caller not enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let progress = ProgressService::new(&state.db)
        .get_progress(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

/// Mark a document as read.
///
/// Completing the last outstanding item of a course records its completion date
/// and issues the certificate. Marking an already completed document is a no-op.
///
/// # Returns
/// - `200 OK` - Updated course progress
/// - `403 Forbidden` - Caller is not enrolled in the document's course
/// - `404 Not Found` - Document not found
#[utoipa::path(
    post,
    path = "/api/documents/{id}/complete",
    tag = ENROLLMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Updated course progress", body = CourseProgressDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not enrolled", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let progress = ProgressService::new(&state.db)
        .complete_document(state.storage.as_ref(), &user, id)
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}
