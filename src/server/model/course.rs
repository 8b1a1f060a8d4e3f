//! Course domain models and parameters.
//!
//! A course is owned by one instructor, belongs to at most one category, is tagged
//! with any number of technologies, and moves between draft and published states.
//! Its `points` value is derived from its lessons and never set directly.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CourseStatus;

use crate::{
    model::course::{
        CourseDetailDto, CourseDto, CreateCourseDto, PaginatedCoursesDto, UpdateCourseDto,
    },
    server::{
        error::internal::InternalError,
        model::{
            category::{Category, Technology},
            lesson::Lesson,
            user::User,
        },
    },
};

/// Course entity together with the rows it references, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct CourseWithRelations {
    pub course: entity::course::Model,
    pub instructor: Option<entity::user::Model>,
    pub category: Option<entity::course_category::Model>,
    pub technologies: Vec<entity::technology::Model>,
    pub lesson_count: u64,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub instructor_id: i32,
    pub instructor_name: String,
    pub category: Option<Category>,
    pub technologies: Vec<Technology>,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub thumbnail_key: Option<String>,
    pub thumbnail_url: Option<String>,
    pub points: i32,
    pub lesson_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Converts a course and its loaded relations into the domain model.
    ///
    /// # Returns
    /// - `Ok(Course)` - Converted course with technologies sorted by name
    /// - `Err(InternalError::MissingRelation)` - The instructor row was not loaded
    pub fn from_with_relations(result: CourseWithRelations) -> Result<Self, InternalError> {
        let instructor = result.instructor.ok_or(InternalError::MissingRelation {
            entity: "user",
            id: result.course.instructor_id,
        })?;

        let mut technologies: Vec<Technology> = result
            .technologies
            .into_iter()
            .map(Technology::from_entity)
            .collect();
        technologies.sort_by(|a, b| a.name.cmp(&b.name));

        let course = result.course;
        Ok(Self {
            id: course.id,
            instructor_id: course.instructor_id,
            instructor_name: instructor.full_name,
            category: result.category.map(Category::from_entity),
            technologies,
            title: course.title,
            description: course.description,
            status: course.status,
            thumbnail_key: course.thumbnail_key,
            thumbnail_url: course.thumbnail_url,
            points: course.points,
            lesson_count: result.lesson_count,
            created_at: course.created_at,
            updated_at: course.updated_at,
            published_at: course.published_at,
        })
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            instructor_id: self.instructor_id,
            instructor_name: self.instructor_name,
            category: self.category.map(Category::into_dto),
            technologies: self
                .technologies
                .into_iter()
                .map(Technology::into_dto)
                .collect(),
            status: status_name(self.status).to_string(),
            thumbnail_url: self.thumbnail_url,
            points: self.points,
            lesson_count: self.lesson_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
        }
    }
}

pub fn status_name(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Draft => "draft",
        CourseStatus::Published => "published",
    }
}

/// Whether `user` may edit, publish, unpublish or delete the course.
pub fn can_manage(course: &entity::course::Model, user: &User) -> bool {
    user.is_admin() || course.instructor_id == user.id
}

/// Whether `viewer` may see the course. Drafts are limited to their managers.
pub fn is_visible_to(course: &entity::course::Model, viewer: Option<&User>) -> bool {
    course.status == CourseStatus::Published || viewer.is_some_and(|u| can_manage(course, u))
}

/// Course points: rounded average of lesson points, 0 without lessons.
pub fn average_points(lesson_points: &[i32]) -> i32 {
    if lesson_points.is_empty() {
        return 0;
    }

    let sum: i64 = lesson_points.iter().map(|&p| p as i64).sum();
    (sum as f64 / lesson_points.len() as f64).round() as i32
}

/// Course with its ordered lessons, as shown on the course page.
#[derive(Debug, Clone)]
pub struct CourseDetail {
    pub course: Course,
    pub lessons: Vec<Lesson>,
}

impl CourseDetail {
    pub fn into_dto(self) -> CourseDetailDto {
        CourseDetailDto {
            course: self.course.into_dto(),
            lessons: self.lessons.into_iter().map(Lesson::into_summary_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub instructor_id: i32,
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    pub technology_ids: Vec<i32>,
}

impl CreateCourseParams {
    pub fn from_dto(instructor_id: i32, dto: CreateCourseDto) -> Self {
        Self {
            instructor_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            category_id: dto.category_id,
            technology_ids: dedup(dto.technology_ids),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    pub technology_ids: Vec<i32>,
}

impl UpdateCourseParams {
    pub fn from_dto(id: i32, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            category_id: dto.category_id,
            technology_ids: dedup(dto.technology_ids),
        }
    }
}

fn dedup(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Filters for the public course catalog.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub category_id: Option<i32>,
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone)]
pub struct PaginatedCourses {
    pub courses: Vec<Course>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCourses {
    pub fn into_dto(self) -> PaginatedCoursesDto {
        PaginatedCoursesDto {
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
