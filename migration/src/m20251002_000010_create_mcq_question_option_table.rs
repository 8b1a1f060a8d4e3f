use sea_orm_migration::{prelude::*, schema::*};

use super::m20251002_000009_create_quiz_bank_question_table::QuizBankQuestion;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(McqQuestionOption::Table)
                    .if_not_exists()
                    .col(pk_auto(McqQuestionOption::Id))
                    .col(integer(McqQuestionOption::QuestionId))
                    .col(string(McqQuestionOption::Text))
                    .col(boolean(McqQuestionOption::IsCorrect).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mcq_question_option_question_id")
                            .from(McqQuestionOption::Table, McqQuestionOption::QuestionId)
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
            .drop_table(Table::drop().table(McqQuestionOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum McqQuestionOption {
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
}
