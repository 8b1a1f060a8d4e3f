use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User, m20251001_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumComment::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumComment::Id))
                    .col(integer(ForumComment::CourseId))
                    .col(integer_null(ForumComment::LessonId))
                    .col(integer(ForumComment::UserId))
                    .col(text(ForumComment::Content))
                    .col(
                        timestamp_with_time_zone(ForumComment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ForumComment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_comment_course_id")
                            .from(ForumComment::Table, ForumComment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_comment_user_id")
                            .from(ForumComment::Table, ForumComment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ForumReply::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumReply::Id))
                    .col(integer(ForumReply::CommentId))
                    .col(integer(ForumReply::UserId))
                    .col(text(ForumReply::Content))
                    .col(
                        timestamp_with_time_zone(ForumReply::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_comment_id")
                            .from(ForumReply::Table, ForumReply::CommentId)
                            .to(ForumComment::Table, ForumComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_user_id")
                            .from(ForumReply::Table, ForumReply::UserId)
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
            .drop_table(Table::drop().table(ForumReply::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ForumComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumComment {
    Table,
    Id,
    CourseId,
    LessonId,
    UserId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum ForumReply {
    Table,
    Id,
    CommentId,
    UserId,
    Content,
    CreatedAt,
}
