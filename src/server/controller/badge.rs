use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, badge::BadgeDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::badge::BadgeService,
        state::AppState,
    },
};

/// Tag for grouping badge endpoints in OpenAPI documentation
pub static BADGE_TAG: &str = "badge";

/// List every badge with the caller's progress towards it.
///
/// Progress is recomputed on each call, so badges whose target was reached since
/// the last visit are unlocked here.
#[utoipa::path(
    get,
    path = "/api/badges",
    tag = BADGE_TAG,
    responses(
        (status = 200, description = "Badges with the caller's progress", body = Vec<BadgeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_badges(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let badges = BadgeService::new(&state.db).list(user.id).await?;
    let dtos: Vec<_> = badges.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Claim an unlocked badge, adding its points to the caller's leaderboard total.
///
/// # Returns
/// - `200 OK` - The claimed badge
/// - `400 Bad Request` - Badge not unlocked yet, or already claimed
/// - `404 Not Found` - Badge not found
#[utoipa::path(
    post,
    path = "/api/badges/{id}/claim",
    tag = BADGE_TAG,
    params(("id" = i32, Path, description = "Badge ID")),
    responses(
        (status = 200, description = "Claimed badge", body = BadgeDto),
        (status = 400, description = "Badge locked or already claimed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Badge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn claim_badge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let badge = BadgeService::new(&state.db).claim(user.id, id).await?;

    Ok((StatusCode::OK, Json(badge.into_dto())))
}
