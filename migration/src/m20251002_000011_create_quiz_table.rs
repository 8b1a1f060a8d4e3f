use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000006_create_lesson_table::Lesson,
    m20251002_000008_create_quiz_bank_table::QuizBank,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(pk_auto(Quiz::Id))
                    .col(integer_uniq(Quiz::LessonId))
                    .col(integer(Quiz::QuizBankId))
                    .col(string(Quiz::Title))
                    .col(integer(Quiz::QuizSize))
                    .col(
                        timestamp_with_time_zone(Quiz::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_lesson_id")
                            .from(Quiz::Table, Quiz::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_quiz_bank_id")
                            .from(Quiz::Table, Quiz::QuizBankId)
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
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quiz {
    Table,
    Id,
    LessonId,
    QuizBankId,
    Title,
    QuizSize,
    CreatedAt,
}
