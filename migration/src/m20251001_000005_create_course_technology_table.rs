use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000003_create_technology_table::Technology,
    m20251001_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseTechnology::Table)
                    .if_not_exists()
                    .col(integer(CourseTechnology::CourseId))
                    .col(integer(CourseTechnology::TechnologyId))
                    .primary_key(
                        Index::create()
                            .col(CourseTechnology::CourseId)
                            .col(CourseTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_technology_course_id")
                            .from(CourseTechnology::Table, CourseTechnology::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_technology_technology_id")
                            .from(CourseTechnology::Table, CourseTechnology::TechnologyId)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseTechnology::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseTechnology {
    Table,
    CourseId,
    TechnologyId,
}
