use crate::server::data::quiz_attempt::QuizAttemptRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod create;

/// Creates a learner, a quiz with `questions` two-option questions and returns
/// `(user, quiz, questions)`.
async fn setup_quiz(
    db: &sea_orm::DatabaseConnection,
    questions: usize,
) -> Result<
    (
        entity::user::Model,
        entity::quiz::Model,
        Vec<(
            entity::quiz_bank_question::Model,
            Vec<entity::mcq_question_option::Model>,
        )>,
    ),
    DbErr,
> {
    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;
    let mut created = Vec::with_capacity(questions);
    for _ in 0..questions {
        created.push(factory::quiz::create_simple_question(db, bank.id).await?);
    }
    let quiz = factory::quiz::create_quiz(db, lesson.id, bank.id, questions as i32).await?;
    let user = factory::create_user(db).await?;

    Ok((user, quiz, created))
}
