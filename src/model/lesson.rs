use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LessonSummaryDto {
    pub id: i32,
    pub title: String,
    pub position: i32,
    pub points: i32,
    pub document_count: usize,
    pub has_quiz: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    /// Raw markdown as written by the instructor.
    pub content: String,
    /// Markdown rendered to HTML, with raw HTML escaped.
    pub content_html: String,
    pub position: i32,
    pub points: i32,
    pub documents: Vec<DocumentDto>,
    pub quiz_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateLessonDto {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Appended after the last lesson when omitted.
    pub position: Option<i32>,
    /// Defaults to 10.
    pub points: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateLessonDto {
    pub title: String,
    pub content: String,
    pub position: i32,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub lesson_id: i32,
    pub title: String,
    pub file_url: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}
