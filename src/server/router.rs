use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            analytics, attempt, badge, catalog, certificate, course, enrollment, forum,
            leaderboard, lesson, notification, profile, quiz,
        },
        state::AppState,
        util::upload::MAX_UPLOAD_BYTES,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Coursehub API", description = "Courses, quizzes, progress and certificates"),
    paths(
        course::list_courses,
        course::create_course,
        course::get_my_courses,
        course::get_course,
        course::update_course,
        course::delete_course,
        course::publish_course,
        course::unpublish_course,
        course::upload_thumbnail,
        lesson::list_lessons,
        lesson::create_lesson,
        lesson::get_lesson,
        lesson::update_lesson,
        lesson::delete_lesson,
        lesson::upload_document,
        lesson::delete_document,
        quiz::list_quiz_banks,
        quiz::create_quiz_bank,
        quiz::add_question,
        quiz::list_questions,
        quiz::delete_question,
        quiz::create_quiz,
        quiz::get_quiz,
        quiz::delete_quiz,
        attempt::start_attempt,
        attempt::get_attempt_history,
        attempt::get_attempt,
        attempt::submit_answer,
        attempt::complete_attempt,
        enrollment::enroll,
        enrollment::unenroll,
        enrollment::get_my_enrollments,
        enrollment::get_progress,
        enrollment::complete_document,
        certificate::get_my_certificates,
        certificate::generate_certificate,
        certificate::get_certificate_by_number,
        certificate::get_external_certificates,
        certificate::create_external_certificate,
        certificate::update_external_certificate,
        certificate::delete_external_certificate,
        forum::list_comments,
        forum::create_comment,
        forum::update_comment,
        forum::create_reply,
        forum::delete_comment,
        forum::delete_reply,
        badge::get_badges,
        badge::claim_badge,
        leaderboard::get_leaderboard,
        leaderboard::get_my_rank,
        notification::get_notifications,
        notification::get_unread_count,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::delete_notification,
        profile::get_profile,
        profile::update_profile,
        profile::upload_avatar,
        profile::get_cv,
        profile::get_public_profile,
        catalog::list_categories,
        catalog::create_category,
        catalog::update_category,
        catalog::delete_category,
        catalog::list_technologies,
        catalog::create_technology,
        catalog::delete_technology,
        analytics::get_course_analytics,
        analytics::get_overview,
    ),
    components(schemas(model::api::ErrorDto)),
    modifiers(&BearerAuth),
    tags(
        (name = course::COURSE_TAG, description = "Course catalog and authoring"),
        (name = lesson::LESSON_TAG, description = "Lessons and documents"),
        (name = quiz::QUIZ_TAG, description = "Quiz banks, questions and quizzes"),
        (name = attempt::ATTEMPT_TAG, description = "Quiz attempts"),
        (name = enrollment::ENROLLMENT_TAG, description = "Enrollments and progress"),
        (name = certificate::CERTIFICATE_TAG, description = "Issued and external certificates"),
        (name = forum::FORUM_TAG, description = "Course discussion"),
        (name = badge::BADGE_TAG, description = "Badges"),
        (name = leaderboard::LEADERBOARD_TAG, description = "Leaderboard"),
        (name = notification::NOTIFICATION_TAG, description = "Notifications"),
        (name = profile::PROFILE_TAG, description = "Profiles and CV"),
        (name = catalog::CATALOG_TAG, description = "Categories and technologies"),
        (name = analytics::ANALYTICS_TAG, description = "Course and platform analytics"),
    ),
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// API routes live under `/api`, stored files are served from `storage_dir` under
/// `/files`, and the Swagger UI is mounted at `/api/docs`.
pub fn router(storage_dir: &str) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .nest_service("/files", ServeDir::new(storage_dir))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Courses
        .route("/courses", get(course::list_courses).post(course::create_course))
        .route("/courses/mine", get(course::get_my_courses))
        .route(
            "/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/courses/{id}/publish", post(course::publish_course))
        .route("/courses/{id}/unpublish", post(course::unpublish_course))
        .route("/courses/{id}/thumbnail", post(course::upload_thumbnail))
        // Lessons and documents
        .route(
            "/courses/{id}/lessons",
            get(lesson::list_lessons).post(lesson::create_lesson),
        )
        .route(
            "/lessons/{id}",
            get(lesson::get_lesson)
                .put(lesson::update_lesson)
                .delete(lesson::delete_lesson),
        )
        .route("/lessons/{id}/documents", post(lesson::upload_document))
        .route("/documents/{id}", delete(lesson::delete_document))
        .route("/documents/{id}/complete", post(enrollment::complete_document))
        // Quiz banks and quizzes
        .route(
            "/courses/{id}/quiz-banks",
            get(quiz::list_quiz_banks).post(quiz::create_quiz_bank),
        )
        .route(
            "/quiz-banks/{id}/questions",
            get(quiz::list_questions).post(quiz::add_question),
        )
        .route("/questions/{id}", delete(quiz::delete_question))
        .route("/lessons/{id}/quiz", post(quiz::create_quiz))
        .route("/quizzes/{id}", get(quiz::get_quiz).delete(quiz::delete_quiz))
        // Attempts
        .route(
            "/quizzes/{id}/attempts",
            get(attempt::get_attempt_history).post(attempt::start_attempt),
        )
        .route("/attempts/{id}", get(attempt::get_attempt))
        .route("/attempts/{id}/answers", put(attempt::submit_answer))
        .route("/attempts/{id}/complete", post(attempt::complete_attempt))
        // Enrollments and progress
        .route(
            "/courses/{id}/enrollment",
            post(enrollment::enroll).delete(enrollment::unenroll),
        )
        .route("/enrollments", get(enrollment::get_my_enrollments))
        .route("/courses/{id}/progress", get(enrollment::get_progress))
        // Certificates
        .route("/certificates", get(certificate::get_my_certificates))
        .route(
            "/certificates/{number}",
            get(certificate::get_certificate_by_number),
        )
        .route(
            "/courses/{id}/certificate",
            post(certificate::generate_certificate),
        )
        .route(
            "/external-certificates",
            get(certificate::get_external_certificates)
                .post(certificate::create_external_certificate),
        )
        .route(
            "/external-certificates/{id}",
            put(certificate::update_external_certificate)
                .delete(certificate::delete_external_certificate),
        )
        // Forum
        .route(
            "/courses/{id}/comments",
            get(forum::list_comments).post(forum::create_comment),
        )
        .route(
            "/comments/{id}",
            put(forum::update_comment).delete(forum::delete_comment),
        )
        .route("/comments/{id}/replies", post(forum::create_reply))
        .route("/replies/{id}", delete(forum::delete_reply))
        // Badges and leaderboard
        .route("/badges", get(badge::get_badges))
        .route("/badges/{id}/claim", post(badge::claim_badge))
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/leaderboard/me", get(leaderboard::get_my_rank))
        // Notifications
        .route("/notifications", get(notification::get_notifications))
        .route(
            "/notifications/unread-count",
            get(notification::get_unread_count),
        )
        .route(
            "/notifications/read-all",
            post(notification::mark_all_notifications_read),
        )
        .route(
            "/notifications/{id}",
            delete(notification::delete_notification),
        )
        .route(
            "/notifications/{id}/read",
            post(notification::mark_notification_read),
        )
        // Profile
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/profile/avatar", post(profile::upload_avatar))
        .route("/profile/cv", get(profile::get_cv))
        .route("/users/{id}/profile", get(profile::get_public_profile))
        // Catalog
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/categories/{id}",
            put(catalog::update_category).delete(catalog::delete_category),
        )
        .route(
            "/technologies",
            get(catalog::list_technologies).post(catalog::create_technology),
        )
        .route("/technologies/{id}", delete(catalog::delete_technology))
        // Analytics
        .route(
            "/analytics/courses/{id}",
            get(analytics::get_course_analytics),
        )
        .route("/analytics/overview", get(analytics::get_overview))
}
