//! Course progress and completion.
//!
//! Progress items are a course's documents plus one item per lesson with a quiz. When a
//! learner's last item is done the enrollment gets its completion date, a certificate
//! is issued and the learner is notified. Callers evaluate badges afterwards.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::{
        document::DocumentRepository, enrollment::EnrollmentRepository,
        lesson::LessonRepository, progress::ProgressRepository, quiz::QuizRepository,
    },
    error::{auth::AuthError, AppError},
    model::{enrollment::CourseProgress, notification::NewNotification, user::User},
    service::{
        badge::BadgeService, certificate::CertificateService, course::CourseService,
        lesson::LessonService, notification::NotificationService,
    },
    storage::FileStorage,
};

pub struct ProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts completed and total progress items of a learner in a course.
    ///
    /// A completed quiz only counts while its lesson still has a quiz.
    pub async fn compute(&self, user_id: i32, course_id: i32) -> Result<CourseProgress, AppError> {
        let lessons = LessonRepository::new(self.db).get_by_course(course_id).await?;
        let lesson_ids: Vec<i32> = lessons.iter().map(|l| l.id).collect();

        let document_ids: Vec<i32> = DocumentRepository::new(self.db)
            .get_by_lessons(lesson_ids.clone())
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();
        let quiz_lessons: HashSet<i32> = QuizRepository::new(self.db)
            .get_by_lessons(lesson_ids.clone())
            .await?
            .into_iter()
            .map(|q| q.lesson_id)
            .collect();

        let repo = ProgressRepository::new(self.db);
        let mut completed_document_ids: Vec<i32> = repo
            .get_completed_documents(user_id, document_ids.clone())
            .await?
            .into_iter()
            .map(|p| p.document_id)
            .collect();
        completed_document_ids.sort_unstable();

        let mut completed_quiz_lesson_ids: Vec<i32> = repo
            .get_lesson_progress(user_id, lesson_ids)
            .await?
            .into_iter()
            .filter(|p| p.quiz_completed && quiz_lessons.contains(&p.lesson_id))
            .map(|p| p.lesson_id)
            .collect();
        completed_quiz_lesson_ids.sort_unstable();

        Ok(CourseProgress {
            course_id,
            total_items: (document_ids.len() + quiz_lessons.len()) as u64,
            completed_items: (completed_document_ids.len() + completed_quiz_lesson_ids.len())
                as u64,
            completed_document_ids,
            completed_quiz_lesson_ids,
        })
    }

    /// Gets the caller's progress in a course they are enrolled in
    ///
    /// # Returns
    /// - `Ok(CourseProgress)` - Item counts and completed ids
    /// - `Err(AppError::NotFound)` - Course not visible or caller not enrolled
    pub async fn get_progress(&self, user: &User, course_id: i32) -> Result<CourseProgress, AppError> {
        CourseService::new(self.db)
            .require_visible(course_id, Some(user))
            .await?;

        if EnrollmentRepository::new(self.db)
            .find(user.id, course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        }

        self.compute(user.id, course_id).await
    }

    pub async fn has_learner_completed_all_course_content(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<bool, AppError> {
        Ok(self.compute(user_id, course_id).await?.is_complete())
    }

    /// Marks a document complete for an enrolled learner.
    ///
    /// Repeating the call is a no-op apart from re-evaluating completion.
    ///
    /// # Returns
    /// - `Ok(CourseProgress)` - Progress after the update
    /// - `Err(AppError::NotFound)` - Document does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not enrolled in the course
    pub async fn complete_document(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        document_id: i32,
    ) -> Result<CourseProgress, AppError> {
        let document = DocumentRepository::new(self.db)
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;
        let lesson = LessonService::new(self.db)
            .find_lesson(document.lesson_id)
            .await?;

        self.require_enrolled(user, lesson.course_id).await?;

        if ProgressRepository::new(self.db)
            .mark_document_complete(user.id, document_id)
            .await?
        {
            tracing::debug!("User {} completed document {}", user.id, document_id);
        }

        self.refresh_lesson(user.id, lesson.id, None).await?;
        let progress = self
            .evaluate_completion(storage, user.id, lesson.course_id)
            .await?;
        BadgeService::new(self.db).evaluate(user.id).await?;

        Ok(progress)
    }

    /// Marks a lesson's quiz item done after a completed attempt.
    pub async fn on_quiz_completed(
        &self,
        storage: &dyn FileStorage,
        user_id: i32,
        lesson_id: i32,
    ) -> Result<CourseProgress, AppError> {
        let lesson = LessonService::new(self.db).find_lesson(lesson_id).await?;

        self.refresh_lesson(user_id, lesson_id, Some(true)).await?;

        self.evaluate_completion(storage, user_id, lesson.course_id)
            .await
    }

    /// Records completion once the learner has done every item of the course.
    ///
    /// Sets the enrollment's completion date and notifies the learner the first time,
    /// then makes sure a certificate exists. Does nothing for callers who are not enrolled.
    pub async fn evaluate_completion(
        &self,
        storage: &dyn FileStorage,
        user_id: i32,
        course_id: i32,
    ) -> Result<CourseProgress, AppError> {
        let progress = self.compute(user_id, course_id).await?;
        if !progress.is_complete() {
            return Ok(progress);
        }

        let repo = EnrollmentRepository::new(self.db);
        let Some(enrollment) = repo.find(user_id, course_id).await? else {
            return Ok(progress);
        };

        if enrollment.completion_date.is_none() {
            repo.set_completion_date(enrollment.id, Utc::now()).await?;

            let course = CourseService::new(self.db).find(course_id).await?;
            NotificationService::new(self.db)
                .notify(NewNotification {
                    user_id,
                    kind: NotificationKind::CourseCompleted,
                    title: "Course completed".to_string(),
                    message: format!("You completed '{}'", course.title),
                    link: Some(format!("/courses/{}", course_id)),
                })
                .await?;

            tracing::info!("User {} completed course {}", user_id, course_id);
        }

        CertificateService::new(self.db)
            .generate(storage, user_id, course_id)
            .await?;

        Ok(progress)
    }

    /// Requires an enrollment, reporting its absence as a permission failure.
    pub async fn require_enrolled(
        &self,
        user: &User,
        course_id: i32,
    ) -> Result<entity::enrollment::Model, AppError> {
        EnrollmentRepository::new(self.db)
            .find(user.id, course_id)
            .await?
            .ok_or_else(|| {
                AuthError::AccessDenied(
                    user.id,
                    format!("User is not enrolled in course {}", course_id),
                )
                .into()
            })
    }

    /// Recomputes a lesson's completed flag: every document done and its quiz done, if any.
    async fn refresh_lesson(
        &self,
        user_id: i32,
        lesson_id: i32,
        quiz_completed: Option<bool>,
    ) -> Result<(), AppError> {
        let repo = ProgressRepository::new(self.db);

        let document_ids: Vec<i32> = DocumentRepository::new(self.db)
            .get_by_lessons(vec![lesson_id])
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();
        let documents_done = repo
            .get_completed_documents(user_id, document_ids.clone())
            .await?
            .len()
            == document_ids.len();

        let has_quiz = QuizRepository::new(self.db)
            .find_by_lesson(lesson_id)
            .await?
            .is_some();
        let quiz_done = match quiz_completed {
            Some(done) => done,
            None => repo
                .get_lesson_progress(user_id, vec![lesson_id])
                .await?
                .first()
                .is_some_and(|p| p.quiz_completed),
        };

        let is_completed = documents_done && (!has_quiz || quiz_done);
        repo.upsert_lesson_progress(user_id, lesson_id, quiz_completed, is_completed)
            .await?;

        Ok(())
    }
}
