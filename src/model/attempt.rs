use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::quiz::QuestionOptionDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AttemptQuestionDto {
    pub question_id: i32,
    pub position: i32,
    pub text: String,
    /// Only present once the attempt is completed.
    pub explanation: Option<String>,
    pub options: Vec<QuestionOptionDto>,
    pub selected_option_id: Option<i32>,
    /// Only present once the attempt is completed.
    pub is_correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuizAttemptDto {
    pub id: i32,
    pub quiz_id: i32,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: i32,
    pub questions: Vec<AttemptQuestionDto>,
}

/// Attempt header without questions, used for attempt history.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuizAttemptSummaryDto {
    pub id: i32,
    pub quiz_id: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmitAnswerDto {
    pub question_id: i32,
    pub option_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnswerDto {
    pub attempt_id: i32,
    pub question_id: i32,
    pub selected_option_id: i32,
    pub answered_at: DateTime<Utc>,
}
