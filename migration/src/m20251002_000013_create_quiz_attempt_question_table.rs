use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251002_000009_create_quiz_bank_question_table::QuizBankQuestion,
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
                    .table(QuizAttemptQuestion::Table)
                    .if_not_exists()
                    .col(integer(QuizAttemptQuestion::AttemptId))
                    .col(integer(QuizAttemptQuestion::QuestionId))
                    .col(integer(QuizAttemptQuestion::Position))
                    .primary_key(
                        Index::create()
                            .col(QuizAttemptQuestion::AttemptId)
                            .col(QuizAttemptQuestion::QuestionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_question_attempt_id")
                            .from(QuizAttemptQuestion::Table, QuizAttemptQuestion::AttemptId)
                            .to(QuizAttempt::Table, QuizAttempt::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_question_question_id")
                            .from(QuizAttemptQuestion::Table, QuizAttemptQuestion::QuestionId)
                            .to(QuizBankQuestion::Table, QuizBankQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizAttemptQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizAttemptQuestion {
    Table,
    AttemptId,
    QuestionId,
    Position,
}
