use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        analytics::{CourseAnalyticsDto, PlatformOverviewDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Get enrollment, completion and quiz figures for one course.
///
/// # Access Control
/// - The course's instructor or an admin
///
/// # Returns
/// - `200 OK` - Course analytics; completion rate is a fraction in `0..=1`
/// - `403 Forbidden` - Caller does not manage the course
/// - `404 Not Found` - Course not found
#[utoipa::path(
    get,
    path = "/api/analytics/courses/{id}",
    tag = ANALYTICS_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course analytics", body = CourseAnalyticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_course_analytics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let analytics = AnalyticsService::new(&state.db).course(&user, id).await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/analytics/overview",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Platform-wide counts", body = PlatformOverviewDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let overview = AnalyticsService::new(&state.db).overview().await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}
