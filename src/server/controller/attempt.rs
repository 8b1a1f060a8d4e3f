use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        attempt::{AnswerDto, QuizAttemptDto, QuizAttemptSummaryDto, SubmitAnswerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::attempt::SubmitAnswerParams,
        service::quiz_attempt::QuizAttemptService,
        state::AppState,
    },
};

/// Tag for grouping quiz attempt endpoints in OpenAPI documentation
pub static ATTEMPT_TAG: &str = "attempt";

/// Start a quiz attempt, or resume the caller's unfinished one.
///
/// A new attempt draws `min(quiz_size, bank size)` distinct questions from the
/// quiz's bank in random order. Correct answers stay hidden until completion.
///
/// # Access Control
/// - Learners enrolled in the quiz's course
///
/// # Returns
/// - `201 Created` - The new or resumed attempt
/// - `400 Bad Request` - The quiz's bank has no questions
/// - `403 Forbidden` - Caller is not enrolled
/// - `404 Not Found` - Quiz not found
#[utoipa::path(
    post,
    path = "/api/quizzes/{id}/attempts",
    tag = ATTEMPT_TAG,
    params(("id" = i32, Path, description = "Quiz ID")),
    responses(
        (status = 201, description = "Attempt in progress", body = QuizAttemptDto),
        (status = 400, description = "Quiz bank is empty", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not enrolled", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn start_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let attempt = QuizAttemptService::new(&state.db).start(&user, id).await?;

    Ok((StatusCode::CREATED, Json(attempt.into_dto())))
}

/// List the caller's attempts at a quiz, newest first.
#[utoipa::path(
    get,
    path = "/api/quizzes/{id}/attempts",
    tag = ATTEMPT_TAG,
    params(("id" = i32, Path, description = "Quiz ID")),
    responses(
        (status = 200, description = "Attempt history", body = Vec<QuizAttemptSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attempt_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let attempts = QuizAttemptService::new(&state.db).history(&user, id).await?;
    let dtos: Vec<_> = attempts.into_iter().map(|a| a.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/attempts/{id}",
    tag = ATTEMPT_TAG,
    params(("id" = i32, Path, description = "Attempt ID")),
    responses(
        (status = 200, description = "Attempt with its questions", body = QuizAttemptDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Attempt belongs to another user", body = ErrorDto),
        (status = 404, description = "Attempt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let attempt = QuizAttemptService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(attempt.into_dto())))
}

/// Record or replace the answer to one of the attempt's questions.
///
/// # Returns
/// - `200 OK` - The recorded answer, without correctness
/// - `400 Bad Request` - Attempt completed, question not drawn, or option from another question
/// - `403 Forbidden` - Attempt belongs to another user
/// - `404 Not Found` - Attempt not found
#[utoipa::path(
    put,
    path = "/api/attempts/{id}/answers",
    tag = ATTEMPT_TAG,
    params(("id" = i32, Path, description = "Attempt ID")),
    request_body = SubmitAnswerDto,
    responses(
        (status = 200, description = "Answer recorded", body = AnswerDto),
        (status = 400, description = "Answer rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Attempt belongs to another user", body = ErrorDto),
        (status = 404, description = "Attempt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let answer = QuizAttemptService::new(&state.db)
        .submit_answer(SubmitAnswerParams {
            attempt_id: id,
            user_id: user.id,
            question_id: payload.question_id,
            option_id: payload.option_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

/// Complete an attempt and score it.
///
/// Unanswered questions count as wrong. Completing marks the lesson's quiz done,
/// which can complete the course and issue its certificate.
///
/// # Returns
/// - `200 OK` - Scored attempt with correct answers and explanations revealed
/// - `400 Bad Request` - Attempt already completed
/// - `403 Forbidden` - Attempt belongs to another user
/// - `404 Not Found` - Attempt not found
#[utoipa::path(
    post,
    path = "/api/attempts/{id}/complete",
    tag = ATTEMPT_TAG,
    params(("id" = i32, Path, description = "Attempt ID")),
    responses(
        (status = 200, description = "Completed attempt", body = QuizAttemptDto),
        (status = 400, description = "Attempt already completed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Attempt belongs to another user", body = ErrorDto),
        (status = 404, description = "Attempt not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let attempt = QuizAttemptService::new(&state.db)
        .complete(state.storage.as_ref(), &user, id)
        .await?;

    Ok((StatusCode::OK, Json(attempt.into_dto())))
}
