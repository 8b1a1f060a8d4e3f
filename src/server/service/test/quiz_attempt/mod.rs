use crate::server::{
    error::{auth::AuthError, AppError},
    model::attempt::SubmitAnswerParams,
    service::{
        quiz_attempt::QuizAttemptService,
        test::{as_user, MemoryStorage},
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod start;

/// Quiz with `questions` two-option questions on a published course, and an enrolled learner.
///
/// Returns the learner, the quiz, and each question's (id, correct option, wrong option).
async fn enrolled_quiz(
    db: &DatabaseConnection,
    questions: usize,
    quiz_size: i32,
) -> Result<(entity::user::Model, entity::quiz::Model, Vec<(i32, i32, i32)>), AppError> {
    let (_, course) = factory::helpers::create_published_course(db).await?;
    let lesson = factory::create_lesson(db, course.id).await?;
    let bank = factory::quiz::create_quiz_bank(db, course.id).await?;

    let mut created = Vec::with_capacity(questions);
    for _ in 0..questions {
        let (question, options) = factory::quiz::create_simple_question(db, bank.id).await?;
        created.push((question.id, options[0].id, options[1].id));
    }

    let quiz = factory::quiz::create_quiz(db, lesson.id, bank.id, quiz_size).await?;
    let learner = factory::create_user(db).await?;
    factory::create_enrollment(db, learner.id, course.id).await?;

    Ok((learner, quiz, created))
}
