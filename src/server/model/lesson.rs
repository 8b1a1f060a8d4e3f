//! Lesson and document domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::lesson::{CreateLessonDto, DocumentDto, LessonDto, LessonSummaryDto, UpdateLessonDto},
    server::util::markdown,
};

/// Points awarded for a lesson when the instructor does not set a value.
pub const DEFAULT_LESSON_POINTS: i32 = 10;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: i32,
    pub lesson_id: i32,
    pub title: String,
    pub file_key: String,
    pub file_url: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            title: entity.title,
            file_key: entity.file_key,
            file_url: entity.file_url,
            content_type: entity.content_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            lesson_id: self.lesson_id,
            title: self.title,
            file_url: self.file_url,
            content_type: self.content_type,
            created_at: self.created_at,
        }
    }
}

/// Lesson with its documents and the id of its quiz, if any.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub points: i32,
    pub created_at: DateTime<Utc>,
    pub documents: Vec<Document>,
    pub quiz_id: Option<i32>,
}

impl Lesson {
    pub fn from_entity(
        entity: entity::lesson::Model,
        documents: Vec<entity::document::Model>,
        quiz: Option<&entity::quiz::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            title: entity.title,
            content: entity.content,
            position: entity.position,
            points: entity.points,
            created_at: entity.created_at,
            documents: documents.into_iter().map(Document::from_entity).collect(),
            quiz_id: quiz.map(|q| q.id),
        }
    }

    /// Number of progress items: one per document plus one for the quiz.
    pub fn item_count(&self) -> u64 {
        self.documents.len() as u64 + u64::from(self.quiz_id.is_some())
    }

    /// Publishing requires every lesson to carry at least one progress item.
    pub fn has_content(&self) -> bool {
        self.item_count() > 0
    }

    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            course_id: self.course_id,
            content_html: markdown::render(&self.content),
            title: self.title,
            content: self.content,
            position: self.position,
            points: self.points,
            documents: self.documents.into_iter().map(Document::into_dto).collect(),
            quiz_id: self.quiz_id,
            created_at: self.created_at,
        }
    }

    pub fn into_summary_dto(self) -> LessonSummaryDto {
        LessonSummaryDto {
            id: self.id,
            title: self.title,
            position: self.position,
            points: self.points,
            document_count: self.documents.len(),
            has_quiz: self.quiz_id.is_some(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub course_id: i32,
    pub title: String,
    pub content: String,
    pub position: Option<i32>,
    pub points: i32,
}

impl CreateLessonParams {
    pub fn from_dto(course_id: i32, dto: CreateLessonDto) -> Self {
        Self {
            course_id,
            title: dto.title.trim().to_string(),
            content: dto.content,
            position: dto.position,
            points: dto.points.unwrap_or(DEFAULT_LESSON_POINTS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLessonParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub points: i32,
}

impl UpdateLessonParams {
    pub fn from_dto(id: i32, dto: UpdateLessonDto) -> Self {
        Self {
            id,
            title: dto.title.trim().to_string(),
            content: dto.content,
            position: dto.position,
            points: dto.points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub lesson_id: i32,
    pub title: String,
    pub file_key: String,
    pub file_url: String,
    pub content_type: String,
}
