//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    issue_id: Option<i32>,
    kind: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new unread `COMMENT_ADDED` notification factory for the user.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            issue_id: None,
            kind: "COMMENT_ADDED".to_string(),
            message: "Something happened".to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn issue_id(mut self, issue_id: Option<i32>) -> Self {
        self.issue_id = issue_id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            issue_id: ActiveValue::Set(self.issue_id),
            kind: ActiveValue::Set(self.kind),
            message: ActiveValue::Set(self.message),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
