use sea_orm_migration::{prelude::*, schema::*};

use super::m20251002_000008_create_quiz_bank_table::QuizBank;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizBankQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizBankQuestion::Id))
                    .col(integer(QuizBankQuestion::QuizBankId))
                    .col(text(QuizBankQuestion::Text))
                    .col(text_null(QuizBankQuestion::Explanation))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_bank_question_quiz_bank_id")
                            .from(QuizBankQuestion::Table, QuizBankQuestion::QuizBankId)
                            .to(QuizBank::Table, QuizBank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizBankQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizBankQuestion {
    Table,
    Id,
    QuizBankId,
    Text,
    Explanation,
}
