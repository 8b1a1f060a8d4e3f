use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub enrolled_at: DateTime<Utc>,
    /// Null while the enrollment is ongoing.
    pub completion_date: Option<DateTime<Utc>>,
    pub progress: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CourseProgressDto {
    pub course_id: i32,
    pub total_items: u64,
    pub completed_items: u64,
    /// Whole percentage in `0..=100`.
    pub percentage: i32,
    pub completed: bool,
    pub completed_document_ids: Vec<i32>,
    pub completed_quiz_lesson_ids: Vec<i32>,
}
