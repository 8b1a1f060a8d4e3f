use crate::server::{
    error::AppError,
    model::quiz::{CreateQuestionParams, CreateQuizParams, NewOption},
    service::{quiz::QuizService, test::as_user},
};
use test_utils::{builder::TestBuilder, factory};

mod add_question;
mod create_quiz;
