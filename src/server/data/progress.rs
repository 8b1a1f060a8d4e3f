//! Learner progress repository.
//!
//! Document progress rows exist only for completed documents. Lesson progress rows
//! hold the quiz-completed flag and the derived lesson completion flag.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a completed document. Repeated calls keep the first completion time.
    ///
    /// # Returns
    /// - `Ok(true)` - Document newly marked complete
    /// - `Ok(false)` - Document was already complete
    /// - `Err(DbErr)` - Database error
    pub async fn mark_document_complete(&self, user_id: i32, document_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::DocumentProgress::insert(
            entity::document_progress::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                document_id: ActiveValue::Set(document_id),
                completed_at: ActiveValue::Set(Utc::now()),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::document_progress::Column::UserId,
                entity::document_progress::Column::DocumentId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Gets the user's completion rows among the given documents
    pub async fn get_completed_documents(
        &self,
        user_id: i32,
        document_ids: Vec<i32>,
    ) -> Result<Vec<entity::document_progress::Model>, DbErr> {
        if document_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DocumentProgress::find()
            .filter(entity::document_progress::Column::UserId.eq(user_id))
            .filter(entity::document_progress::Column::DocumentId.is_in(document_ids))
            .all(self.db)
            .await
    }

    /// Gets every document the user has completed, across all courses
    pub async fn get_all_document_progress(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::document_progress::Model>, DbErr> {
        entity::prelude::DocumentProgress::find()
            .filter(entity::document_progress::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets the user's lesson progress rows among the given lessons
    pub async fn get_lesson_progress(
        &self,
        user_id: i32,
        lesson_ids: Vec<i32>,
    ) -> Result<Vec<entity::lesson_progress::Model>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LessonProgress::find()
            .filter(entity::lesson_progress::Column::UserId.eq(user_id))
            .filter(entity::lesson_progress::Column::LessonId.is_in(lesson_ids))
            .all(self.db)
            .await
    }

    /// Creates or updates the lesson progress row.
    ///
    /// `quiz_completed` is only written when `Some`, so a document completion never
    /// clears an earlier quiz completion.
    pub async fn upsert_lesson_progress(
        &self,
        user_id: i32,
        lesson_id: i32,
        quiz_completed: Option<bool>,
        is_completed: bool,
    ) -> Result<entity::lesson_progress::Model, DbErr> {
        let mut update_columns = vec![
            entity::lesson_progress::Column::IsCompleted,
            entity::lesson_progress::Column::UpdatedAt,
        ];
        if quiz_completed.is_some() {
            update_columns.push(entity::lesson_progress::Column::QuizCompleted);
        }

        entity::prelude::LessonProgress::insert(entity::lesson_progress::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            lesson_id: ActiveValue::Set(lesson_id),
            quiz_completed: ActiveValue::Set(quiz_completed.unwrap_or(false)),
            is_completed: ActiveValue::Set(is_completed),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::lesson_progress::Column::UserId,
                entity::lesson_progress::Column::LessonId,
            ])
            .update_columns(update_columns)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
