use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251001_000006_create_lesson_table::Lesson,
    m20251001_000007_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentProgress::Table)
                    .if_not_exists()
                    .col(integer(DocumentProgress::UserId))
                    .col(integer(DocumentProgress::DocumentId))
                    .col(
                        timestamp_with_time_zone(DocumentProgress::CompletedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DocumentProgress::UserId)
                            .col(DocumentProgress::DocumentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_progress_user_id")
                            .from(DocumentProgress::Table, DocumentProgress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_progress_document_id")
                            .from(DocumentProgress::Table, DocumentProgress::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LessonProgress::Table)
                    .if_not_exists()
                    .col(integer(LessonProgress::UserId))
                    .col(integer(LessonProgress::LessonId))
                    .col(boolean(LessonProgress::QuizCompleted).default(false))
                    .col(boolean(LessonProgress::IsCompleted).default(false))
                    .col(
                        timestamp_with_time_zone(LessonProgress::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(LessonProgress::UserId)
                            .col(LessonProgress::LessonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_progress_user_id")
                            .from(LessonProgress::Table, LessonProgress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_progress_lesson_id")
                            .from(LessonProgress::Table, LessonProgress::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonProgress::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DocumentProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocumentProgress {
    Table,
    UserId,
    DocumentId,
    CompletedAt,
}

#[derive(DeriveIden)]
pub enum LessonProgress {
    Table,
    UserId,
    LessonId,
    QuizCompleted,
    IsCompleted,
    UpdatedAt,
}
