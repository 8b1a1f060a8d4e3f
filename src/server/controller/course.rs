use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, UploadFormDto},
        course::{
            CourseDetailDto, CourseDto, CreateCourseDto, PaginatedCoursesDto, UpdateCourseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::course::{CourseFilter, CreateCourseParams, UpdateCourseParams},
        service::course::CourseService,
        state::AppState,
        util::upload::read_upload,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

#[derive(Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub category_id: Option<i32>,
    pub search: Option<String>,
}

fn default_per_page() -> u64 {
    12
}

/// Browse the published course catalog.
///
/// Returns a page of published courses, optionally narrowed to one category or to
/// titles containing the search text. Drafts never appear here.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of published courses
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Courses per page, 1 to 100 (default: 12)"),
        ("category_id" = Option<i32>, Query, description = "Only courses in this category"),
        ("search" = Option<String>, Query, description = "Case-insensitive title search")
    ),
    responses(
        (status = 200, description = "Page of published courses", body = PaginatedCoursesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CourseFilter {
        category_id: params.category_id,
        search: params.search.filter(|s| !s.trim().is_empty()),
        page: params.page,
        per_page: params.per_page,
    };

    let courses = CourseService::new(&state.db).list_published(filter).await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Create a draft course.
///
/// # Access Control
/// - `Instructor` - Instructors and admins create courses; the caller becomes the instructor
///
/// # Returns
/// - `201 Created` - The new draft course
/// - `400 Bad Request` - Missing title, unknown category or technology
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is a learner
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Created draft course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let params = CreateCourseParams::from_dto(user.id, payload);
    let course = CourseService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// List the courses the caller teaches, drafts included.
#[utoipa::path(
    get,
    path = "/api/courses/mine",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Courses taught by the caller", body = Vec<CourseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Instructor])
        .await?;

    let courses = CourseService::new(&state.db).get_mine(&user).await?;
    let dtos: Vec<_> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a course with its lesson outline.
///
/// Drafts are only visible to their instructor and admins; anyone else gets 404.
///
/// # Access Control
/// - Public for published courses
///
/// # Returns
/// - `200 OK` - Course and lesson summaries in position order
/// - `401 Unauthorized` - A token was sent but is invalid
/// - `404 Not Found` - Course missing or a draft the caller cannot see
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course detail", body = CourseDetailDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let detail = CourseService::new(&state.db)
        .get_detail(id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update a course's title, description, category and technologies.
///
/// # Access Control
/// - The course's instructor or an admin
///
/// # Returns
/// - `200 OK` - Updated course
/// - `400 Bad Request` - Invalid course data
/// - `403 Forbidden` - Caller does not manage the course
/// - `404 Not Found` - Course not found
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = UpdateCourseParams::from_dto(id, payload);
    let course = CourseService::new(&state.db).update(&user, params).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course with all of its lessons, quizzes and enrollments.
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CourseService::new(&state.db)
        .delete(state.storage.as_ref(), &user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a course.
///
/// A course needs at least one lesson, and every lesson needs content (a document
/// or a quiz), before it can be published. The instructor is notified.
///
/// # Returns
/// - `200 OK` - Published course
/// - `400 Bad Request` - No lessons, or a lesson without content
/// - `403 Forbidden` - Caller does not manage the course
/// - `404 Not Found` - Course not found
#[utoipa::path(
    post,
    path = "/api/courses/{id}/publish",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Published course", body = CourseDto),
        (status = 400, description = "Course is not ready to publish", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn publish_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let course = CourseService::new(&state.db).publish(&user, id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Return a course to draft. Existing enrollments are kept.
#[utoipa::path(
    post,
    path = "/api/courses/{id}/unpublish",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course back in draft", body = CourseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unpublish_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let course = CourseService::new(&state.db).unpublish(&user, id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Upload a course thumbnail, replacing the previous one.
///
/// Expects a multipart form with an image in its `file` part.
#[utoipa::path(
    post,
    path = "/api/courses/{id}/thumbnail",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Course with its new thumbnail", body = CourseDto),
        (status = 400, description = "Missing, empty or non-image file", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let upload = read_upload(multipart).await?;
    let course = CourseService::new(&state.db)
        .set_thumbnail(state.storage.as_ref(), &user, id, upload)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}
