//! Quiz bank, question and quiz domain models.
//!
//! A quiz bank is a per-course pool of multiple-choice questions. A quiz attaches to
//! exactly one lesson and draws `quiz_size` questions from one bank when an attempt
//! starts.

use chrono::{DateTime, Utc};

use crate::model::quiz::{
    CreateQuestionDto, CreateQuizDto, QuestionDto, QuestionOptionDto, QuizBankDto, QuizDto,
};

#[derive(Debug, Clone)]
pub struct QuizBank {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub question_count: u64,
    pub created_at: DateTime<Utc>,
}

impl QuizBank {
    pub fn from_entity(entity: entity::quiz_bank::Model, question_count: u64) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            name: entity.name,
            question_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> QuizBankDto {
        QuizBankDto {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            question_count: self.question_count,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOption {
    pub id: i32,
    pub text: String,
    pub is_correct: bool,
}

impl QuestionOption {
    pub fn from_entity(entity: entity::mcq_question_option::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            is_correct: entity.is_correct,
        }
    }

    /// Converts to a DTO, exposing correctness only when `reveal` is set.
    pub fn into_dto(self, reveal: bool) -> QuestionOptionDto {
        QuestionOptionDto {
            id: self.id,
            text: self.text,
            is_correct: reveal.then_some(self.is_correct),
        }
    }
}

/// Multiple-choice question with its options in insertion order.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: i32,
    pub quiz_bank_id: i32,
    pub text: String,
    pub explanation: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn from_entity(
        entity: entity::quiz_bank_question::Model,
        options: Vec<entity::mcq_question_option::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            quiz_bank_id: entity.quiz_bank_id,
            text: entity.text,
            explanation: entity.explanation,
            options: options.into_iter().map(QuestionOption::from_entity).collect(),
        }
    }

    /// Converts to a DTO. Bank management reveals answers; attempt views decide per state.
    pub fn into_dto(self, reveal: bool) -> QuestionDto {
        QuestionDto {
            id: self.id,
            quiz_bank_id: self.quiz_bank_id,
            text: self.text,
            explanation: if reveal { self.explanation } else { None },
            options: self
                .options
                .into_iter()
                .map(|o| o.into_dto(reveal))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    pub quiz_bank_id: i32,
    pub text: String,
    pub explanation: Option<String>,
    pub options: Vec<NewOption>,
}

impl CreateQuestionParams {
    pub fn from_dto(quiz_bank_id: i32, dto: CreateQuestionDto) -> Self {
        Self {
            quiz_bank_id,
            text: dto.text.trim().to_string(),
            explanation: dto
                .explanation
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            options: dto
                .options
                .into_iter()
                .map(|o| NewOption {
                    text: o.text.trim().to_string(),
                    is_correct: o.is_correct,
                })
                .collect(),
        }
    }

    /// Checks the question has text, at least two non-empty options, and a correct one.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.is_empty() {
            return Err("Question text is required".to_string());
        }
        if self.options.len() < 2 {
            return Err("A question needs at least two options".to_string());
        }
        if self.options.iter().any(|o| o.text.is_empty()) {
            return Err("Option text is required".to_string());
        }
        if !self.options.iter().any(|o| o.is_correct) {
            return Err("At least one option must be correct".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub id: i32,
    pub lesson_id: i32,
    pub quiz_bank_id: i32,
    pub title: String,
    pub quiz_size: i32,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn from_entity(entity: entity::quiz::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            quiz_bank_id: entity.quiz_bank_id,
            title: entity.title,
            quiz_size: entity.quiz_size,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> QuizDto {
        QuizDto {
            id: self.id,
            lesson_id: self.lesson_id,
            quiz_bank_id: self.quiz_bank_id,
            title: self.title,
            quiz_size: self.quiz_size,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuizParams {
    pub lesson_id: i32,
    pub quiz_bank_id: i32,
    pub title: String,
    pub quiz_size: i32,
}

impl CreateQuizParams {
    pub fn from_dto(lesson_id: i32, dto: CreateQuizDto) -> Self {
        Self {
            lesson_id,
            quiz_bank_id: dto.quiz_bank_id,
            title: dto.title.trim().to_string(),
            quiz_size: dto.quiz_size,
        }
    }
}
