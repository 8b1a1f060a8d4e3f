use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, leaderboard::LeaderboardEntryDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::leaderboard::LeaderboardService,
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

const MAX_LIMIT: usize = 100;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Get the top of the leaderboard.
///
/// Points are the sum of completed course points, completed quiz attempt scores
/// and claimed badge points. Ties are broken by user id.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(("limit" = Option<usize>, Query, description = "Entries to return, at most 100 (default: 10)")),
    responses(
        (status = 200, description = "Top of the leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = LeaderboardService::new(&state.db)
        .top(params.limit.clamp(1, MAX_LIMIT))
        .await?;
    let dtos: Vec<_> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/me",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Caller's rank and points", body = LeaderboardEntryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entry = LeaderboardService::new(&state.db)
        .rank_of(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not ranked".to_string()))?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}
