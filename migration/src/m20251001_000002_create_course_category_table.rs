use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseCategory::Id))
                    .col(string_uniq(CourseCategory::Name))
                    .col(text_null(CourseCategory::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseCategory {
    Table,
    Id,
    Name,
    Description,
}
