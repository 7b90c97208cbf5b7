use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(integer(Issue::ClientId))
                    .col(string(Issue::Title))
                    .col(text(Issue::Description))
                    .col(string(Issue::Status).default("OPEN"))
                    .col(string(Issue::Priority).default("MEDIUM"))
                    .col(integer(Issue::ReporterId))
                    .col(integer_null(Issue::AssigneeId))
                    .col(timestamp_with_time_zone_null(Issue::DueDate))
                    .col(timestamp_with_time_zone_null(Issue::DueNotifiedAt))
                    .col(
                        timestamp_with_time_zone(Issue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Issue::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_client_id")
                            .from(Issue::Table, Issue::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_reporter_id")
                            .from(Issue::Table, Issue::ReporterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_assignee_id")
                            .from(Issue::Table, Issue::AssigneeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issue_client_id")
                    .table(Issue::Table)
                    .col(Issue::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issue_due_date")
                    .table(Issue::Table)
                    .col(Issue::DueDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    ClientId,
    Title,
    Description,
    Status,
    Priority,
    ReporterId,
    AssigneeId,
    DueDate,
    DueNotifiedAt,
    CreatedAt,
    UpdatedAt,
}
