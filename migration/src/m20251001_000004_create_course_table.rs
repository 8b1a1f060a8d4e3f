use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000001_create_user_table::User,
    m20251001_000002_create_course_category_table::CourseCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(integer(Course::InstructorId))
                    .col(integer_null(Course::CategoryId))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(string_len(Course::Status, 16).default("draft"))
                    .col(string_null(Course::ThumbnailKey))
                    .col(string_null(Course::ThumbnailUrl))
                    .col(integer(Course::Points).default(0))
                    .col(
                        timestamp_with_time_zone(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Course::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Course::PublishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_instructor_id")
                            .from(Course::Table, Course::InstructorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_category_id")
                            .from(Course::Table, Course::CategoryId)
                            .to(CourseCategory::Table, CourseCategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    InstructorId,
    CategoryId,
    Title,
    Description,
    Status,
    ThumbnailKey,
    ThumbnailUrl,
    Points,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}
