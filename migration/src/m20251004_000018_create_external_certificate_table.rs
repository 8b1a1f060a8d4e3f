use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExternalCertificate::Table)
                    .if_not_exists()
                    .col(pk_auto(ExternalCertificate::Id))
                    .col(integer(ExternalCertificate::UserId))
                    .col(string(ExternalCertificate::Title))
                    .col(string(ExternalCertificate::Issuer))
                    .col(date(ExternalCertificate::IssuedOn))
                    .col(string_null(ExternalCertificate::CredentialUrl))
                    .col(
                        timestamp_with_time_zone(ExternalCertificate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_external_certificate_user_id")
                            .from(ExternalCertificate::Table, ExternalCertificate::UserId)
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
            .drop_table(Table::drop().table(ExternalCertificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExternalCertificate {
    Table,
    Id,
    UserId,
    Title,
    Issuer,
    IssuedOn,
    CredentialUrl,
    CreatedAt,
}
