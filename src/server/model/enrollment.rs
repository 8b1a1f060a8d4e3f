//! Enrollment and course progress domain models.

use chrono::{DateTime, Utc};

use crate::model::enrollment::{CourseProgressDto, EnrollmentDto};

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub course_title: String,
    pub enrolled_at: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
    /// Progress percentage at the time of loading.
    pub progress: i32,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model, course_title: String, progress: i32) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            course_id: entity.course_id,
            course_title,
            enrolled_at: entity.enrolled_at,
            completion_date: entity.completion_date,
            progress,
        }
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            course_id: self.course_id,
            course_title: self.course_title,
            enrolled_at: self.enrolled_at,
            completion_date: self.completion_date,
            progress: self.progress,
        }
    }
}

/// Completed versus total progress items of one learner in one course.
///
/// Items are the course's documents plus one per lesson that has a quiz.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseProgress {
    pub course_id: i32,
    pub total_items: u64,
    pub completed_items: u64,
    pub completed_document_ids: Vec<i32>,
    pub completed_quiz_lesson_ids: Vec<i32>,
}

impl CourseProgress {
    pub fn percentage(&self) -> i32 {
        progress_percentage(self.completed_items, self.total_items)
    }

    /// True when the course has content and every item is done.
    pub fn is_complete(&self) -> bool {
        self.total_items > 0 && self.completed_items == self.total_items
    }

    pub fn into_dto(self) -> CourseProgressDto {
        CourseProgressDto {
            course_id: self.course_id,
            total_items: self.total_items,
            completed_items: self.completed_items,
            percentage: self.percentage(),
            completed: self.is_complete(),
            completed_document_ids: self.completed_document_ids,
            completed_quiz_lesson_ids: self.completed_quiz_lesson_ids,
        }
    }
}

/// `round(100 * completed / total)` clamped to `0..=100`, or 0 when `total` is 0.
pub fn progress_percentage(completed: u64, total: u64) -> i32 {
    if total == 0 {
        return 0;
    }

    let completed = completed.min(total);
    (100.0 * completed as f64 / total as f64).round() as i32
}
