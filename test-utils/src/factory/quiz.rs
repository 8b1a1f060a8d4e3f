//! Factories for quiz banks, questions, quizzes and quiz attempts.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a quiz bank for `course_id`.
pub async fn create_quiz_bank(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::quiz_bank::Model, DbErr> {
    entity::quiz_bank::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        name: ActiveValue::Set(format!("Bank {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a question in `quiz_bank_id` with the given `(text, is_correct)` options.
///
/// # Returns
/// - `Ok((question, options))` - Options are returned in the order given
/// - `Err(DbErr)` - Database error during creation
pub async fn create_question(
    db: &DatabaseConnection,
    quiz_bank_id: i32,
    options: &[(&str, bool)],
) -> Result<
    (
        entity::quiz_bank_question::Model,
        Vec<entity::mcq_question_option::Model>,
    ),
    DbErr,
> {
    let question = entity::quiz_bank_question::ActiveModel {
        quiz_bank_id: ActiveValue::Set(quiz_bank_id),
        text: ActiveValue::Set(format!("Question {}?", next_id())),
        explanation: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut created = Vec::with_capacity(options.len());
    for (text, is_correct) in options {
        let option = entity::mcq_question_option::ActiveModel {
            question_id: ActiveValue::Set(question.id),
            text: ActiveValue::Set((*text).to_string()),
            is_correct: ActiveValue::Set(*is_correct),
            ..Default::default()
        }
        .insert(db)
        .await?;
        created.push(option);
    }

    Ok((question, created))
}

/// Creates a two-option question whose first option is correct.
pub async fn create_simple_question(
    db: &DatabaseConnection,
    quiz_bank_id: i32,
) -> Result<
    (
        entity::quiz_bank_question::Model,
        Vec<entity::mcq_question_option::Model>,
    ),
    DbErr,
> {
    create_question(db, quiz_bank_id, &[("right", true), ("wrong", false)]).await
}

/// Creates a quiz for `lesson_id` drawing `quiz_size` questions from `quiz_bank_id`.
pub async fn create_quiz(
    db: &DatabaseConnection,
    lesson_id: i32,
    quiz_bank_id: i32,
    quiz_size: i32,
) -> Result<entity::quiz::Model, DbErr> {
    entity::quiz::ActiveModel {
        lesson_id: ActiveValue::Set(lesson_id),
        quiz_bank_id: ActiveValue::Set(quiz_bank_id),
        title: ActiveValue::Set(format!("Quiz {}", next_id())),
        quiz_size: ActiveValue::Set(quiz_size),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for quiz attempts, used to build up attempt history directly.
///
/// # Example
///
/// ```rust,ignore
/// let attempt = QuizAttemptFactory::new(&db, quiz.id, user.id)
///     .completed(3, 3, Utc::now())
///     .build()
///     .await?;
/// ```
pub struct QuizAttemptFactory<'a> {
    db: &'a DatabaseConnection,
    quiz_id: i32,
    user_id: i32,
    total_questions: i32,
    correct_answers: i32,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> QuizAttemptFactory<'a> {
    /// Creates an incomplete attempt factory with one question and no correct answers.
    pub fn new(db: &'a DatabaseConnection, quiz_id: i32, user_id: i32) -> Self {
        Self {
            db,
            quiz_id,
            user_id,
            total_questions: 1,
            correct_answers: 0,
            completed_at: None,
        }
    }

    /// Marks the attempt completed at `at` with `correct` of `total` answers right.
    pub fn completed(mut self, correct: i32, total: i32, at: DateTime<Utc>) -> Self {
        self.correct_answers = correct;
        self.total_questions = total;
        self.completed_at = Some(at);
        self
    }

    /// Inserts the attempt into the database.
    pub async fn build(self) -> Result<entity::quiz_attempt::Model, DbErr> {
        let started_at = self.completed_at.unwrap_or_else(Utc::now);

        entity::quiz_attempt::ActiveModel {
            quiz_id: ActiveValue::Set(self.quiz_id),
            user_id: ActiveValue::Set(self.user_id),
            started_at: ActiveValue::Set(started_at),
            completed_at: ActiveValue::Set(self.completed_at),
            is_completed: ActiveValue::Set(self.completed_at.is_some()),
            total_questions: ActiveValue::Set(self.total_questions),
            correct_answers: ActiveValue::Set(self.correct_answers),
            score: ActiveValue::Set(self.correct_answers),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
