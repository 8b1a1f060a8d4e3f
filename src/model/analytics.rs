use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuizAnalyticsDto {
    pub quiz_id: i32,
    pub lesson_id: i32,
    pub title: String,
    pub attempt_count: u64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CourseAnalyticsDto {
    pub course_id: i32,
    pub enrollment_count: u64,
    pub completion_count: u64,
    /// Completed enrollments over all enrollments, `0.0..=1.0`.
    pub completion_rate: f64,
    /// Mean progress percentage over all enrollments.
    pub average_progress: f64,
    pub quizzes: Vec<QuizAnalyticsDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PlatformOverviewDto {
    pub user_count: u64,
    pub course_count: u64,
    pub published_course_count: u64,
    pub enrollment_count: u64,
    pub certificate_count: u64,
}
