//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an issue together with everything it depends on.
///
/// Creates, in order:
/// 1. An ACCOUNT_MANAGER user
/// 2. A client managed by that user
/// 3. A CLIENT user linked to the client, acting as reporter
/// 4. An OPEN issue reported by the client user
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((manager, client, reporter, issue))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_issue_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::client::Model,
        entity::user::Model,
        entity::issue::Model,
    ),
    DbErr,
> {
    let manager = crate::factory::user::UserFactory::new(db)
        .role("ACCOUNT_MANAGER")
        .build()
        .await?;
    let client = crate::factory::client::ClientFactory::new(db)
        .account_manager_id(Some(manager.id))
        .build()
        .await?;
    let reporter = crate::factory::user::UserFactory::new(db)
        .role("CLIENT")
        .client_id(Some(client.id))
        .build()
        .await?;
    let issue = crate::factory::issue::create_issue(db, client.id, reporter.id).await?;

    Ok((manager, client, reporter, issue))
}
