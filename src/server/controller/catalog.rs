use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, CreateTechnologyDto, TechnologyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::CategoryParams,
        service::{category::CategoryService, technology::TechnologyService},
        state::AppState,
    },
};

/// Tag for grouping category and technology endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All course categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).list().await?;
    let dtos: Vec<_> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a course category.
///
/// # Access Control
/// - `Admin` - Only admins manage the catalog
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Empty or duplicate name
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATALOG_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 400, description = "Empty or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(CategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Updated category", body = CategoryDto),
        (status = 400, description = "Empty or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(id, CategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category. Courses in it are left without a category.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/technologies",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All technologies", body = Vec<TechnologyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_technologies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let technologies = TechnologyService::new(&state.db).list().await?;
    let dtos: Vec<_> = technologies.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/technologies",
    tag = CATALOG_TAG,
    request_body = CreateTechnologyDto,
    responses(
        (status = 201, description = "Created technology", body = TechnologyDto),
        (status = 400, description = "Empty or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_technology(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTechnologyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let technology = TechnologyService::new(&state.db)
        .create(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(technology.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/technologies/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Technology ID")),
    responses(
        (status = 204, description = "Technology deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Technology not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_technology(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    TechnologyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
