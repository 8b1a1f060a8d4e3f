use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UploadFormDto},
        cv::CvDto,
        user::{PublicProfileDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::{cv::CvService, user::UserService},
        state::AppState,
        util::upload::read_upload,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the caller's profile.
///
/// The caller is provisioned from their token on first request, so this also
/// works as a "who am I" endpoint right after signing in.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Missing full name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = UpdateProfileParams::from_dto(user.id, payload);
    let updated = UserService::new(&state.db).update_profile(params).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Upload an avatar image, replacing the previous one.
#[utoipa::path(
    post,
    path = "/api/profile/avatar",
    tag = PROFILE_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile with its new avatar", body = UserDto),
        (status = 400, description = "Missing, empty or non-image file", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let upload = read_upload(multipart).await?;
    let updated = UserService::new(&state.db)
        .upload_avatar(state.storage.as_ref(), &user, upload)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Assemble the caller's CV.
///
/// Combines the profile with completed courses, issued and external certificates,
/// claimed badges and the technologies of completed courses as skills.
#[utoipa::path(
    get,
    path = "/api/profile/cv",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's CV", body = CvDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_cv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let cv = CvService::new(&state.db).build(user.id).await?;

    Ok((StatusCode::OK, Json(cv.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/profile",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Public profile", body = PublicProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_profile(id).await?;

    Ok((StatusCode::OK, Json(user.into_public_dto())))
}
