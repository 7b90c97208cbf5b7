pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_client_table;
mod m20260301_000003_create_issue_table;
mod m20260301_000004_create_comment_table;
mod m20260301_000005_create_file_table;
mod m20260301_000006_create_notification_table;
mod m20260301_000007_create_domain_name_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_client_table::Migration),
            Box::new(m20260301_000003_create_issue_table::Migration),
            Box::new(m20260301_000004_create_comment_table::Migration),
            Box::new(m20260301_000005_create_file_table::Migration),
            Box::new(m20260301_000006_create_notification_table::Migration),
            Box::new(m20260301_000007_create_domain_name_table::Migration),
        ]
    }
}
