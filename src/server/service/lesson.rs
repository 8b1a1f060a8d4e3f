//! Lesson and document service.
//!
//! Lessons belong to a course and are managed by its instructor or an admin. Every
//! change to a course's lessons recomputes the course points.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{document::DocumentRepository, lesson::LessonRepository, quiz::QuizRepository},
    error::{internal::InternalError, AppError},
    model::{
        lesson::{CreateDocumentParams, CreateLessonParams, Document, Lesson, UpdateLessonParams},
        user::User,
    },
    service::course::CourseService,
    storage::{delete_files, storage_key, FileStorage},
    util::upload::{require_document, Upload},
};

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a course's lessons in position order with their documents and quiz.
    pub async fn get_course_lessons(&self, course_id: i32) -> Result<Vec<Lesson>, AppError> {
        let lessons = LessonRepository::new(self.db).get_by_course(course_id).await?;

        self.with_content(lessons).await
    }

    /// Lists the lessons of a course the viewer can see
    pub async fn list(&self, course_id: i32, viewer: Option<&User>) -> Result<Vec<Lesson>, AppError> {
        CourseService::new(self.db)
            .require_visible(course_id, viewer)
            .await?;

        self.get_course_lessons(course_id).await
    }

    /// Gets a single lesson with rendered content
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The lesson
    /// - `Err(AppError::NotFound)` - Lesson missing or its course is not visible to the viewer
    pub async fn get(&self, id: i32, viewer: Option<&User>) -> Result<Lesson, AppError> {
        let lesson = self.find_lesson(id).await?;

        CourseService::new(self.db)
            .require_visible(lesson.course_id, viewer)
            .await?;

        self.with_content_one(lesson).await
    }

    pub async fn create(&self, user: &User, params: CreateLessonParams) -> Result<Lesson, AppError> {
        validate_lesson(&params.title, params.points)?;

        let courses = CourseService::new(self.db);
        courses.require_manageable(params.course_id, user).await?;

        let course_id = params.course_id;
        let lesson = LessonRepository::new(self.db).create(params).await?;
        courses.recompute_points(course_id).await?;

        tracing::info!("User {} added lesson {} to course {}", user.id, lesson.id, course_id);

        Ok(Lesson::from_entity(lesson, Vec::new(), None))
    }

    pub async fn update(&self, user: &User, params: UpdateLessonParams) -> Result<Lesson, AppError> {
        validate_lesson(&params.title, params.points)?;

        let existing = self.find_lesson(params.id).await?;
        let courses = CourseService::new(self.db);
        courses.require_manageable(existing.course_id, user).await?;

        let lesson = LessonRepository::new(self.db).update(params).await?;
        courses.recompute_points(lesson.course_id).await?;

        self.with_content_one(lesson).await
    }

    /// Deletes a lesson; its documents, quiz and progress rows cascade.
    ///
    /// Stored document files are removed once the rows are gone.
    pub async fn delete(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        id: i32,
    ) -> Result<(), AppError> {
        let lesson = self.find_lesson(id).await?;
        let courses = CourseService::new(self.db);
        courses.require_manageable(lesson.course_id, user).await?;

        let documents = DocumentRepository::new(self.db)
            .get_by_lessons(vec![id])
            .await?;

        LessonRepository::new(self.db).delete(id).await?;
        courses.recompute_points(lesson.course_id).await?;

        delete_files(storage, documents.into_iter().map(|d| d.file_key)).await;

        Ok(())
    }

    /// Stores an uploaded file and attaches it to a lesson as a document.
    ///
    /// Only allowed document types are accepted; the stored content type follows the
    /// file extension. The document title defaults to the uploaded file name.
    pub async fn add_document(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        lesson_id: i32,
        mut upload: Upload,
    ) -> Result<Document, AppError> {
        let lesson = self.find_lesson(lesson_id).await?;
        CourseService::new(self.db)
            .require_manageable(lesson.course_id, user)
            .await?;
        require_document(&mut upload)?;

        let key = storage_key("documents", &upload.file_name);
        let url = storage
            .save(&key, &upload.bytes, &upload.content_type)
            .await?;

        let document = DocumentRepository::new(self.db)
            .create(CreateDocumentParams {
                lesson_id,
                title: upload.title.unwrap_or(upload.file_name),
                file_key: key,
                file_url: url,
                content_type: upload.content_type,
            })
            .await?;

        Ok(Document::from_entity(document))
    }

    /// Deletes a document and its stored file
    pub async fn delete_document(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        document_id: i32,
    ) -> Result<(), AppError> {
        let repo = DocumentRepository::new(self.db);
        let document = repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;
        let lesson = self.find_lesson(document.lesson_id).await?;
        CourseService::new(self.db)
            .require_manageable(lesson.course_id, user)
            .await?;

        repo.delete(document_id).await?;
        delete_files(storage, [document.file_key]).await;

        Ok(())
    }

    pub async fn find_lesson(&self, id: i32) -> Result<entity::lesson::Model, AppError> {
        LessonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lesson not found".to_string()))
    }

    async fn with_content_one(&self, lesson: entity::lesson::Model) -> Result<Lesson, AppError> {
        let id = lesson.id;
        self.with_content(vec![lesson])
            .await?
            .pop()
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "lesson", id }.into())
    }

    /// Attaches documents and quizzes to lesson rows, keeping their order.
    async fn with_content(&self, lessons: Vec<entity::lesson::Model>) -> Result<Vec<Lesson>, AppError> {
        let lesson_ids: Vec<i32> = lessons.iter().map(|l| l.id).collect();

        let mut documents: HashMap<i32, Vec<entity::document::Model>> = HashMap::new();
        for document in DocumentRepository::new(self.db)
            .get_by_lessons(lesson_ids.clone())
            .await?
        {
            documents.entry(document.lesson_id).or_default().push(document);
        }

        let quizzes: HashMap<i32, entity::quiz::Model> = QuizRepository::new(self.db)
            .get_by_lessons(lesson_ids)
            .await?
            .into_iter()
            .map(|q| (q.lesson_id, q))
            .collect();

        Ok(lessons
            .into_iter()
            .map(|lesson| {
                let docs = documents.remove(&lesson.id).unwrap_or_default();
                let quiz = quizzes.get(&lesson.id);
                Lesson::from_entity(lesson, docs, quiz)
            })
            .collect())
    }
}

fn validate_lesson(title: &str, points: i32) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::BadRequest("Lesson title is required".to_string()));
    }
    if points < 0 {
        return Err(AppError::BadRequest("Lesson points cannot be negative".to_string()));
    }

    Ok(())
}

