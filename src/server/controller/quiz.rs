use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        quiz::{
            CreateQuestionDto, CreateQuizBankDto, CreateQuizDto, QuestionDto, QuizBankDto, QuizDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::quiz::{CreateQuestionParams, CreateQuizParams},
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz bank and quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// List a course's quiz banks with their question counts.
///
/// # Access Control
/// - The course's instructor or an admin
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/quiz-banks",
    tag = QUIZ_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Quiz banks of the course", body = Vec<QuizBankDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_quiz_banks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let banks = QuizService::new(&state.db)
        .list_banks(&user, course_id)
        .await?;
    let dtos: Vec<_> = banks.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/quiz-banks",
    tag = QUIZ_TAG,
    params(("course_id" = i32, Path, description = "Course ID")),
    request_body = CreateQuizBankDto,
    responses(
        (status = 201, description = "Created quiz bank", body = QuizBankDto),
        (status = 400, description = "Missing bank name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_quiz_bank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    Json(payload): Json<CreateQuizBankDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let bank = QuizService::new(&state.db)
        .create_bank(&user, course_id, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(bank.into_dto())))
}

/// Add a multiple-choice question to a bank.
///
/// A question needs text, at least two options, and at least one correct option.
///
/// # Returns
/// - `201 Created` - The question with its options, answers revealed
/// - `400 Bad Request` - Question fails validation
/// - `403 Forbidden` - Caller does not manage the bank's course
/// - `404 Not Found` - Bank not found
#[utoipa::path(
    post,
    path = "/api/quiz-banks/{id}/questions",
    tag = QUIZ_TAG,
    params(("id" = i32, Path, description = "Quiz bank ID")),
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Created question", body = QuestionDto),
        (status = 400, description = "Invalid question", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Quiz bank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateQuestionParams::from_dto(id, payload);
    let question = QuizService::new(&state.db)
        .add_question(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(question.into_dto(true))))
}

#[utoipa::path(
    get,
    path = "/api/quiz-banks/{id}/questions",
    tag = QUIZ_TAG,
    params(("id" = i32, Path, description = "Quiz bank ID")),
    responses(
        (status = 200, description = "Questions with answers revealed", body = Vec<QuestionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Quiz bank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_questions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let questions = QuizService::new(&state.db)
        .list_questions(&user, id)
        .await?;
    let dtos: Vec<_> = questions.into_iter().map(|q| q.into_dto(true)).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = QUIZ_TAG,
    params(("id" = i32, Path, description = "Question ID")),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    QuizService::new(&state.db).delete_question(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach a quiz to a lesson.
///
/// The quiz draws its questions from a bank of the same course. A lesson holds at
/// most one quiz.
#[utoipa::path(
    post,
    path = "/api/lessons/{lesson_id}/quiz",
    tag = QUIZ_TAG,
    params(("lesson_id" = i32, Path, description = "Lesson ID")),
    request_body = CreateQuizDto,
    responses(
        (status = 201, description = "Created quiz", body = QuizDto),
        (status = 400, description = "Invalid quiz, foreign bank or lesson already has a quiz", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Lesson or bank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    Json(payload): Json<CreateQuizDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateQuizParams::from_dto(lesson_id, payload);
    let quiz = QuizService::new(&state.db).create_quiz(&user, params).await?;

    Ok((StatusCode::CREATED, Json(quiz.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{id}",
    tag = QUIZ_TAG,
    params(("id" = i32, Path, description = "Quiz ID")),
    responses(
        (status = 200, description = "Quiz", body = QuizDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let quiz = QuizService::new(&state.db)
        .get_quiz(id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(quiz.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/{id}",
    tag = QUIZ_TAG,
    params(("id" = i32, Path, description = "Quiz ID")),
    responses(
        (status = 204, description = "Quiz deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not manage the course", body = ErrorDto),
        (status = 404, description = "Quiz not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    QuizService::new(&state.db).delete_quiz(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
