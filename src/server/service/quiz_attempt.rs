//! Quiz attempt lifecycle.
//!
//! An attempt draws its questions at random from the quiz's bank when it starts.
//! Answers may be changed until the attempt is completed; completion scores the
//! attempt, marks the lesson's quiz item done and re-evaluates course completion and
//! badges.

use chrono::Utc;
use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{question::QuestionRepository, quiz_attempt::QuizAttemptRepository},
    error::{auth::AuthError, AppError},
    model::{
        attempt::{
            AttemptAnswer, AttemptQuestion, QuizAttempt, QuizAttemptDetail, RecordedAnswer,
            SubmitAnswerParams,
        },
        user::User,
    },
    service::{
        badge::BadgeService, lesson::LessonService, progress::ProgressService,
        quiz::QuizService,
    },
    storage::FileStorage,
};

pub struct QuizAttemptService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizAttemptService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts an attempt, or resumes the caller's unfinished one.
    ///
    /// Draws `min(quiz_size, bank size)` distinct questions in random order.
    ///
    /// # Returns
    /// - `Ok(QuizAttemptDetail)` - New or resumed attempt with its questions
    /// - `Err(AppError::NotFound)` - Quiz does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not enrolled in the course
    /// - `Err(AppError::BadRequest)` - The quiz bank has no questions
    pub async fn start(&self, user: &User, quiz_id: i32) -> Result<QuizAttemptDetail, AppError> {
        let quiz = QuizService::new(self.db).find_quiz(quiz_id).await?;
        let lesson = LessonService::new(self.db).find_lesson(quiz.lesson_id).await?;
        ProgressService::new(self.db)
            .require_enrolled(user, lesson.course_id)
            .await?;

        let repo = QuizAttemptRepository::new(self.db);
        if let Some(attempt) = repo.find_incomplete(user.id, quiz_id).await? {
            return self.detail(attempt).await;
        }

        let bank = QuestionRepository::new(self.db)
            .get_ids_by_bank(quiz.quiz_bank_id)
            .await?;
        if bank.is_empty() {
            return Err(AppError::BadRequest(
                "This quiz has no questions yet".to_string(),
            ));
        }

        let drawn: Vec<i32> = {
            let size = (quiz.quiz_size.max(1) as usize).min(bank.len());
            bank.choose_multiple(&mut rand::rng(), size)
                .copied()
                .collect()
        };

        let attempt = repo.create(quiz_id, user.id, &drawn).await?;
        tracing::debug!(
            "User {} started attempt {} at quiz {} with {} questions",
            user.id,
            attempt.id,
            quiz_id,
            drawn.len()
        );

        self.detail(attempt).await
    }

    /// Gets one of the caller's attempts with its questions and answers
    pub async fn get(&self, user: &User, attempt_id: i32) -> Result<QuizAttemptDetail, AppError> {
        let attempt = self.require_owner(user.id, attempt_id).await?;

        self.detail(attempt).await
    }

    /// Lists the caller's attempts at a quiz, newest first
    pub async fn history(&self, user: &User, quiz_id: i32) -> Result<Vec<QuizAttempt>, AppError> {
        QuizService::new(self.db).find_quiz(quiz_id).await?;

        Ok(QuizAttemptRepository::new(self.db)
            .get_by_user_and_quiz(user.id, quiz_id)
            .await?
            .into_iter()
            .map(QuizAttempt::from_entity)
            .collect())
    }

    /// Records or replaces the answer to a drawn question.
    ///
    /// # Returns
    /// - `Ok(RecordedAnswer)` - The stored answer, without correctness
    /// - `Err(AppError::AuthErr(AccessDenied))` - Attempt belongs to another user
    /// - `Err(AppError::BadRequest)` - Attempt completed, question not drawn, or option
    ///   not belonging to the question
    pub async fn submit_answer(&self, params: SubmitAnswerParams) -> Result<RecordedAnswer, AppError> {
        let repo = QuizAttemptRepository::new(self.db);
        let attempt = self.require_owner(params.user_id, params.attempt_id).await?;
        if attempt.is_completed {
            return Err(AppError::BadRequest("Attempt already completed".to_string()));
        }

        let drawn = repo
            .get_questions(attempt.id)
            .await?
            .iter()
            .any(|q| q.question_id == params.question_id);
        if !drawn {
            return Err(AppError::BadRequest(
                "Question is not part of this attempt".to_string(),
            ));
        }

        let option = QuestionRepository::new(self.db)
            .find_option(params.option_id)
            .await?
            .filter(|o| o.question_id == params.question_id)
            .ok_or_else(|| {
                AppError::BadRequest("Option does not belong to the question".to_string())
            })?;

        let answer = repo
            .upsert_answer(attempt.id, params.question_id, option.id, option.is_correct)
            .await?;

        Ok(RecordedAnswer::from_entity(answer))
    }

    /// Scores and closes an attempt, then updates progress and badges.
    ///
    /// # Returns
    /// - `Ok(QuizAttemptDetail)` - The completed attempt with correctness revealed
    /// - `Err(AppError::BadRequest)` - Attempt already completed
    pub async fn complete(
        &self,
        storage: &dyn FileStorage,
        user: &User,
        attempt_id: i32,
    ) -> Result<QuizAttemptDetail, AppError> {
        let repo = QuizAttemptRepository::new(self.db);
        let attempt = self.require_owner(user.id, attempt_id).await?;
        if attempt.is_completed {
            return Err(AppError::BadRequest("Attempt already completed".to_string()));
        }

        let correct = repo.count_correct(attempt.id).await? as i32;
        let attempt = repo.complete(attempt.id, correct, Utc::now()).await?;
        tracing::info!(
            "User {} completed attempt {} with {}/{}",
            user.id,
            attempt.id,
            correct,
            attempt.total_questions
        );

        let quiz = QuizService::new(self.db).find_quiz(attempt.quiz_id).await?;
        ProgressService::new(self.db)
            .on_quiz_completed(storage, user.id, quiz.lesson_id)
            .await?;
        BadgeService::new(self.db).evaluate(user.id).await?;

        self.detail(attempt).await
    }

    async fn require_owner(
        &self,
        user_id: i32,
        attempt_id: i32,
    ) -> Result<entity::quiz_attempt::Model, AppError> {
        let attempt = QuizAttemptRepository::new(self.db)
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attempt not found".to_string()))?;

        if attempt.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "User attempted to access attempt {} of user {}",
                    attempt_id, attempt.user_id
                ),
            )
            .into());
        }

        Ok(attempt)
    }

    /// Loads drawn questions in position order together with recorded answers.
    async fn detail(&self, attempt: entity::quiz_attempt::Model) -> Result<QuizAttemptDetail, AppError> {
        let repo = QuizAttemptRepository::new(self.db);
        let drawn = repo.get_questions(attempt.id).await?;
        let answers: HashMap<i32, AttemptAnswer> = repo
            .get_answers(attempt.id)
            .await?
            .iter()
            .map(|a| (a.question_id, AttemptAnswer::from_entity(a)))
            .collect();

        let mut questions = QuestionRepository::new(self.db)
            .get_by_ids(drawn.iter().map(|q| q.question_id).collect())
            .await?;

        let questions = drawn
            .into_iter()
            .filter_map(|row| {
                let question = questions.remove(&row.question_id)?;
                Some(AttemptQuestion {
                    position: row.position,
                    answer: answers.get(&row.question_id).cloned(),
                    question,
                })
            })
            .collect();

        Ok(QuizAttemptDetail {
            attempt: QuizAttempt::from_entity(attempt),
            questions,
        })
    }
}
