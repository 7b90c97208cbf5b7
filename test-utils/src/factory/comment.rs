//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on the issue with a unique body.
///
/// # Arguments
/// - `db` - Database connection
/// - `issue_id` - Issue the comment belongs to
/// - `author_id` - User who wrote the comment
pub async fn create_comment(
    db: &DatabaseConnection,
    issue_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    let now = Utc::now();
    entity::comment::ActiveModel {
        issue_id: ActiveValue::Set(issue_id),
        author_id: ActiveValue::Set(author_id),
        body: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
