use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        certificate::{CertificateDto, ExternalCertificateDto, UpsertExternalCertificateDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::certificate::ExternalCertificateParams,
        service::certificate::CertificateService,
        state::AppState,
    },
};

/// Tag for grouping certificate endpoints in OpenAPI documentation
pub static CERTIFICATE_TAG: &str = "certificate";

#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = CERTIFICATE_TAG,
    responses(
        (status = 200, description = "Certificates issued to the caller", body = Vec<CertificateDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_certificates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let certificates = CertificateService::new(&state.db)
        .list_mine(user.id)
        .await?;
    let dtos: Vec<_> = certificates.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Issue the caller's certificate for a completed course.
///
/// Returns the existing certificate when one was already issued, so calling this
/// repeatedly is safe.
///
/// # Returns
/// - `200 OK` - The caller's certificate for the course
/// - `400 Bad Request` - Course content not completed yet
/// - `404 Not Found` - Course not found
#[utoipa::path(
    post,
    path = "/api/courses/{id}/certificate",
    tag = CERTIFICATE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Issued certificate", body = CertificateDto),
        (status = 400, description = "Course not completed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let certificate = CertificateService::new(&state.db)
        .generate(state.storage.as_ref(), user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(certificate.into_dto())))
}

/// Look up a certificate by its number.
///
/// Public so that third parties can verify a certificate a learner shares.
#[utoipa::path(
    get,
    path = "/api/certificates/{number}",
    tag = CERTIFICATE_TAG,
    params(("number" = String, Path, description = "Certificate number")),
    responses(
        (status = 200, description = "Certificate", body = CertificateDto),
        (status = 404, description = "Certificate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_certificate_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let certificate = CertificateService::new(&state.db)
        .get_by_number(&number)
        .await?;

    Ok((StatusCode::OK, Json(certificate.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/external-certificates",
    tag = CERTIFICATE_TAG,
    responses(
        (status = 200, description = "Caller's external certificates", body = Vec<ExternalCertificateDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_external_certificates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let certificates = CertificateService::new(&state.db)
        .list_external(user.id)
        .await?;
    let dtos: Vec<_> = certificates.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Record a certificate earned outside the platform.
///
/// # Returns
/// - `201 Created` - The stored certificate
/// - `400 Bad Request` - Missing title or issuer, or a credential URL that is not absolute http(s)
#[utoipa::path(
    post,
    path = "/api/external-certificates",
    tag = CERTIFICATE_TAG,
    request_body = UpsertExternalCertificateDto,
    responses(
        (status = 201, description = "Stored external certificate", body = ExternalCertificateDto),
        (status = 400, description = "Invalid certificate data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_external_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertExternalCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = ExternalCertificateParams::from_dto(user.id, payload);
    let certificate = CertificateService::new(&state.db)
        .create_external(params)
        .await?;

    Ok((StatusCode::CREATED, Json(certificate.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/external-certificates/{id}",
    tag = CERTIFICATE_TAG,
    params(("id" = i32, Path, description = "External certificate ID")),
    request_body = UpsertExternalCertificateDto,
    responses(
        (status = 200, description = "Updated external certificate", body = ExternalCertificateDto),
        (status = 400, description = "Invalid certificate data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not one of the caller's certificates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_external_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertExternalCertificateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = ExternalCertificateParams::from_dto(user.id, payload);
    let certificate = CertificateService::new(&state.db)
        .update_external(id, params)
        .await?;

    Ok((StatusCode::OK, Json(certificate.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/external-certificates/{id}",
    tag = CERTIFICATE_TAG,
    params(("id" = i32, Path, description = "External certificate ID")),
    responses(
        (status = 204, description = "External certificate deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not one of the caller's certificates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_external_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CertificateService::new(&state.db)
        .delete_external(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
