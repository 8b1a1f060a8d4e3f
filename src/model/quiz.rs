use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuizBankDto {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub question_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateQuizBankDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuestionOptionDto {
    pub id: i32,
    pub text: String,
    /// Omitted while the answer must stay hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub quiz_bank_id: i32,
    pub text: String,
    pub explanation: Option<String>,
    pub options: Vec<QuestionOptionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOptionDto {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateQuestionDto {
    pub text: String,
    pub explanation: Option<String>,
    pub options: Vec<CreateOptionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct QuizDto {
    pub id: i32,
    pub lesson_id: i32,
    pub quiz_bank_id: i32,
    pub title: String,
    pub quiz_size: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateQuizDto {
    pub quiz_bank_id: i32,
    pub title: String,
    pub quiz_size: i32,
}
