use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000004_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuizBank::Table)
                    .if_not_exists()
                    .col(pk_auto(QuizBank::Id))
                    .col(integer(QuizBank::CourseId))
                    .col(string(QuizBank::Name))
                    .col(
                        timestamp_with_time_zone(QuizBank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_bank_course_id")
                            .from(QuizBank::Table, QuizBank::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuizBank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuizBank {
    Table,
    Id,
    CourseId,
    Name,
    CreatedAt,
}
