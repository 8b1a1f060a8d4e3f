//! Quiz attempt repository.
//!
//! Stores attempts, the questions drawn for each attempt, and the learner's answers.
//! Answers are unique per (attempt, question) and are upserted on resubmission.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct QuizAttemptRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizAttemptRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an attempt and records the drawn questions in the given order.
    ///
    /// # Arguments
    /// - `quiz_id` - Quiz being attempted
    /// - `user_id` - Learner taking the attempt
    /// - `question_ids` - Drawn questions; position is the index in this slice
    ///
    /// # Returns
    /// - `Ok(quiz_attempt::Model)` - The new incomplete attempt
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        quiz_id: i32,
        user_id: i32,
        question_ids: &[i32],
    ) -> Result<entity::quiz_attempt::Model, DbErr> {
        let attempt = entity::quiz_attempt::ActiveModel {
            quiz_id: ActiveValue::Set(quiz_id),
            user_id: ActiveValue::Set(user_id),
            started_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            is_completed: ActiveValue::Set(false),
            total_questions: ActiveValue::Set(question_ids.len() as i32),
            correct_answers: ActiveValue::Set(0),
            score: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !question_ids.is_empty() {
            let rows = question_ids.iter().enumerate().map(|(position, &question_id)| {
                entity::quiz_attempt_question::ActiveModel {
                    attempt_id: ActiveValue::Set(attempt.id),
                    question_id: ActiveValue::Set(question_id),
                    position: ActiveValue::Set(position as i32),
                }
            });

            entity::prelude::QuizAttemptQuestion::insert_many(rows)
                .exec(self.db)
                .await?;
        }

        Ok(attempt)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::quiz_attempt::Model>, DbErr> {
        entity::prelude::QuizAttempt::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds the learner's most recent incomplete attempt at a quiz.
    pub async fn find_incomplete(
        &self,
        user_id: i32,
        quiz_id: i32,
    ) -> Result<Option<entity::quiz_attempt::Model>, DbErr> {
        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::QuizId.eq(quiz_id))
            .filter(entity::quiz_attempt::Column::IsCompleted.eq(false))
            .order_by_desc(entity::quiz_attempt::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the learner's attempts at a quiz, newest first.
    pub async fn get_by_user_and_quiz(
        &self,
        user_id: i32,
        quiz_id: i32,
    ) -> Result<Vec<entity::quiz_attempt::Model>, DbErr> {
        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::QuizId.eq(quiz_id))
            .order_by_desc(entity::quiz_attempt::Column::StartedAt)
            .order_by_desc(entity::quiz_attempt::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the questions drawn for an attempt in position order.
    pub async fn get_questions(
        &self,
        attempt_id: i32,
    ) -> Result<Vec<entity::quiz_attempt_question::Model>, DbErr> {
        entity::prelude::QuizAttemptQuestion::find()
            .filter(entity::quiz_attempt_question::Column::AttemptId.eq(attempt_id))
            .order_by_asc(entity::quiz_attempt_question::Column::Position)
            .all(self.db)
            .await
    }

    pub async fn get_answers(
        &self,
        attempt_id: i32,
    ) -> Result<Vec<entity::quiz_attempt_answer::Model>, DbErr> {
        entity::prelude::QuizAttemptAnswer::find()
            .filter(entity::quiz_attempt_answer::Column::AttemptId.eq(attempt_id))
            .all(self.db)
            .await
    }

    /// Records or replaces the answer to one question of an attempt.
    pub async fn upsert_answer(
        &self,
        attempt_id: i32,
        question_id: i32,
        option_id: i32,
        is_correct: bool,
    ) -> Result<entity::quiz_attempt_answer::Model, DbErr> {
        let existing = entity::prelude::QuizAttemptAnswer::find()
            .filter(entity::quiz_attempt_answer::Column::AttemptId.eq(attempt_id))
            .filter(entity::quiz_attempt_answer::Column::QuestionId.eq(question_id))
            .one(self.db)
            .await?;

        match existing {
            Some(answer) => {
                entity::quiz_attempt_answer::ActiveModel {
                    id: ActiveValue::Unchanged(answer.id),
                    selected_option_id: ActiveValue::Set(option_id),
                    is_correct: ActiveValue::Set(is_correct),
                    answered_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .update(self.db)
                .await
            }
            None => {
                entity::quiz_attempt_answer::ActiveModel {
                    attempt_id: ActiveValue::Set(attempt_id),
                    question_id: ActiveValue::Set(question_id),
                    selected_option_id: ActiveValue::Set(option_id),
                    is_correct: ActiveValue::Set(is_correct),
                    answered_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Counts answers flagged correct for an attempt.
    pub async fn count_correct(&self, attempt_id: i32) -> Result<u64, DbErr> {
        entity::prelude::QuizAttemptAnswer::find()
            .filter(entity::quiz_attempt_answer::Column::AttemptId.eq(attempt_id))
            .filter(entity::quiz_attempt_answer::Column::IsCorrect.eq(true))
            .count(self.db)
            .await
    }

    /// Marks an attempt completed with its final tally. Score equals correct answers.
    pub async fn complete(
        &self,
        attempt_id: i32,
        correct_answers: i32,
        completed_at: DateTime<Utc>,
    ) -> Result<entity::quiz_attempt::Model, DbErr> {
        entity::quiz_attempt::ActiveModel {
            id: ActiveValue::Unchanged(attempt_id),
            is_completed: ActiveValue::Set(true),
            completed_at: ActiveValue::Set(Some(completed_at)),
            correct_answers: ActiveValue::Set(correct_answers),
            score: ActiveValue::Set(correct_answers),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Gets a learner's completed attempts ordered by completion time.
    pub async fn get_completed_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::quiz_attempt::Model>, DbErr> {
        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::UserId.eq(user_id))
            .filter(entity::quiz_attempt::Column::IsCompleted.eq(true))
            .order_by_asc(entity::quiz_attempt::Column::CompletedAt)
            .order_by_asc(entity::quiz_attempt::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets completed attempts at any of the given quizzes.
    pub async fn get_completed_by_quizzes(
        &self,
        quiz_ids: Vec<i32>,
    ) -> Result<Vec<entity::quiz_attempt::Model>, DbErr> {
        if quiz_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::QuizId.is_in(quiz_ids))
            .filter(entity::quiz_attempt::Column::IsCompleted.eq(true))
            .all(self.db)
            .await
    }

    /// Gets every completed attempt. Used to total leaderboard points.
    pub async fn get_all_completed(&self) -> Result<Vec<entity::quiz_attempt::Model>, DbErr> {
        entity::prelude::QuizAttempt::find()
            .filter(entity::quiz_attempt::Column::IsCompleted.eq(true))
            .all(self.db)
            .await
    }
}
