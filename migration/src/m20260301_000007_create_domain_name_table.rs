use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DomainName::Table)
                    .if_not_exists()
                    .col(pk_auto(DomainName::Id))
                    .col(integer(DomainName::ClientId))
                    .col(string_uniq(DomainName::Name))
                    .col(string_null(DomainName::Registrar))
                    .col(timestamp_with_time_zone_null(DomainName::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(DomainName::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domain_name_client_id")
                            .from(DomainName::Table, DomainName::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DomainName::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DomainName {
    Table,
    Id,
    ClientId,
    Name,
    Registrar,
    ExpiresAt,
    CreatedAt,
}
