use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251002_000009_create_quiz_bank_question_table::QuizBankQuestion,
    m20251002_000010_create_mcq_question_option_table::McqQuestionOption,
    m20251002_000012_create_quiz_attempt_table::QuizAttempt,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizAttemptAnswer::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizAttemptAnswer::Id))
                    .col(integer(QuizAttemptAnswer::AttemptId))
                    .col(integer(QuizAttemptAnswer::QuestionId))
                    .col(integer(QuizAttemptAnswer::SelectedOptionId))
                    .col(boolean(QuizAttemptAnswer::IsCorrect).default(false))
                    .col(
                        timestamp_with_time_zone(QuizAttemptAnswer::AnsweredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_answer_attempt_id")
                            .from(QuizAttemptAnswer::Table, QuizAttemptAnswer::AttemptId)
                            .to(QuizAttempt::Table, QuizAttempt::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_answer_question_id")
                            .from(QuizAttemptAnswer::Table, QuizAttemptAnswer::QuestionId)
                            .to(QuizBankQuestion::Table, QuizBankQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_answer_option_id")
                            .from(QuizAttemptAnswer::Table, QuizAttemptAnswer::SelectedOptionId)
                            .to(McqQuestionOption::Table, McqQuestionOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizAttemptAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizAttemptAnswer {
    Table,
    Id,
    AttemptId,
    QuestionId,
    SelectedOptionId,
    IsCorrect,
    AnsweredAt,
}
