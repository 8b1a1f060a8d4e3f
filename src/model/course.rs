use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    category::{CategoryDto, TechnologyDto},
    lesson::LessonSummaryDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub instructor_id: i32,
    pub instructor_name: String,
    pub category: Option<CategoryDto>,
    pub technologies: Vec<TechnologyDto>,
    /// Either `draft` or `published`.
    pub status: String,
    pub thumbnail_url: Option<String>,
    /// Rounded average of the course's lesson points.
    pub points: i32,
    pub lesson_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CourseDetailDto {
    pub course: CourseDto,
    pub lessons: Vec<LessonSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub technology_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCourseDto {
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub technology_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedCoursesDto {
    pub courses: Vec<CourseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
