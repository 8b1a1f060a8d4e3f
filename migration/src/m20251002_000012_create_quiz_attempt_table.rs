use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251002_000011_create_quiz_table::Quiz,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizAttempt::Id))
                    .col(integer(QuizAttempt::QuizId))
                    .col(integer(QuizAttempt::UserId))
                    .col(
                        timestamp_with_time_zone(QuizAttempt::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(QuizAttempt::CompletedAt))
                    .col(boolean(QuizAttempt::IsCompleted).default(false))
                    .col(integer(QuizAttempt::TotalQuestions))
                    .col(integer(QuizAttempt::CorrectAnswers).default(0))
                    .col(integer(QuizAttempt::Score).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_quiz_id")
                            .from(QuizAttempt::Table, QuizAttempt::QuizId)
                            .to(Quiz::Table, Quiz::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_attempt_user_id")
                            .from(QuizAttempt::Table, QuizAttempt::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizAttempt {
    Table,
    Id,
    QuizId,
    UserId,
    StartedAt,
    CompletedAt,
    IsCompleted,
    TotalQuestions,
    CorrectAnswers,
    Score,
}
