//! File factory for creating test attachment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 1 KiB `text/plain` attachment on the issue.
///
/// # Arguments
/// - `db` - Database connection
/// - `issue_id` - Issue the file is attached to
/// - `uploader_id` - User who attached the file
pub async fn create_file(
    db: &DatabaseConnection,
    issue_id: i32,
    uploader_id: i32,
) -> Result<entity::file::Model, DbErr> {
    let id = next_id();
    entity::file::ActiveModel {
        issue_id: ActiveValue::Set(issue_id),
        uploader_id: ActiveValue::Set(uploader_id),
        name: ActiveValue::Set(format!("file-{}.txt", id)),
        url: ActiveValue::Set(format!("https://files.example.com/{}", id)),
        size: ActiveValue::Set(1024),
        content_type: ActiveValue::Set("text/plain".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
