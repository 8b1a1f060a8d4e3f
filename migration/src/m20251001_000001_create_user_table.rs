use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::ExternalId))
                    .col(string(User::Email))
                    .col(string(User::FullName))
                    .col(string_len(User::Role, 16).default("learner"))
                    .col(string_null(User::Headline))
                    .col(text_null(User::Bio))
                    .col(string_null(User::AvatarKey))
                    .col(string_null(User::AvatarUrl))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    ExternalId,
    Email,
    FullName,
    Role,
    Headline,
    Bio,
    AvatarKey,
    AvatarUrl,
    CreatedAt,
}
