//! Quiz attempt domain models.
//!
//! An attempt is `Started` when created with its drawn questions, `InProgress` once
//! answers are recorded, and `Completed` after scoring. Completed attempts are
//! immutable; correctness and explanations are only exposed once completed.

use chrono::{DateTime, Utc};

use crate::{
    model::attempt::{AnswerDto, AttemptQuestionDto, QuizAttemptDto, QuizAttemptSummaryDto},
    server::model::quiz::Question,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Started,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct QuizAttempt {
    pub id: i32,
    pub quiz_id: i32,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: i32,
}

impl QuizAttempt {
    pub fn from_entity(entity: entity::quiz_attempt::Model) -> Self {
        Self {
            id: entity.id,
            quiz_id: entity.quiz_id,
            user_id: entity.user_id,
            started_at: entity.started_at,
            completed_at: entity.completed_at,
            is_completed: entity.is_completed,
            total_questions: entity.total_questions,
            correct_answers: entity.correct_answers,
            score: entity.score,
        }
    }

    /// Whether every drawn question was answered correctly.
    pub fn is_perfect(&self) -> bool {
        self.is_completed && self.total_questions > 0 && self.score == self.total_questions
    }

    pub fn into_summary_dto(self) -> QuizAttemptSummaryDto {
        QuizAttemptSummaryDto {
            id: self.id,
            quiz_id: self.quiz_id,
            started_at: self.started_at,
            completed_at: self.completed_at,
            is_completed: self.is_completed,
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            score: self.score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttemptAnswer {
    pub selected_option_id: i32,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AttemptAnswer {
    pub fn from_entity(entity: &entity::quiz_attempt_answer::Model) -> Self {
        Self {
            selected_option_id: entity.selected_option_id,
            is_correct: entity.is_correct,
            answered_at: entity.answered_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttemptQuestion {
    pub position: i32,
    pub question: Question,
    pub answer: Option<AttemptAnswer>,
}

/// Attempt with its drawn questions in position order and the caller's answers.
#[derive(Debug, Clone)]
pub struct QuizAttemptDetail {
    pub attempt: QuizAttempt,
    pub questions: Vec<AttemptQuestion>,
}

impl QuizAttemptDetail {
    pub fn state(&self) -> AttemptState {
        if self.attempt.is_completed {
            AttemptState::Completed
        } else if self.questions.iter().any(|q| q.answer.is_some()) {
            AttemptState::InProgress
        } else {
            AttemptState::Started
        }
    }

    /// Converts to a DTO, revealing correctness only for completed attempts.
    pub fn into_dto(self) -> QuizAttemptDto {
        let reveal = self.attempt.is_completed;
        let attempt = self.attempt;

        QuizAttemptDto {
            id: attempt.id,
            quiz_id: attempt.quiz_id,
            user_id: attempt.user_id,
            started_at: attempt.started_at,
            completed_at: attempt.completed_at,
            is_completed: attempt.is_completed,
            total_questions: attempt.total_questions,
            correct_answers: attempt.correct_answers,
            score: attempt.score,
            questions: self
                .questions
                .into_iter()
                .map(|q| {
                    let question = q.question.into_dto(reveal);
                    AttemptQuestionDto {
                        question_id: question.id,
                        position: q.position,
                        text: question.text,
                        explanation: question.explanation,
                        options: question.options,
                        selected_option_id: q.answer.as_ref().map(|a| a.selected_option_id),
                        is_correct: if reveal {
                            Some(q.answer.is_some_and(|a| a.is_correct))
                        } else {
                            None
                        },
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitAnswerParams {
    pub attempt_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub option_id: i32,
}

/// Answer as acknowledged to the learner, without correctness.
#[derive(Debug, Clone)]
pub struct RecordedAnswer {
    pub attempt_id: i32,
    pub question_id: i32,
    pub selected_option_id: i32,
    pub answered_at: DateTime<Utc>,
}

impl RecordedAnswer {
    pub fn from_entity(entity: entity::quiz_attempt_answer::Model) -> Self {
        Self {
            attempt_id: entity.attempt_id,
            question_id: entity.question_id,
            selected_option_id: entity.selected_option_id,
            answered_at: entity.answered_at,
        }
    }

    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            attempt_id: self.attempt_id,
            question_id: self.question_id,
            selected_option_id: self.selected_option_id,
            answered_at: self.answered_at,
        }
    }
}
