//! Issue factory for creating test issue entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test issues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let issue = IssueFactory::new(&db, client.id, reporter.id)
///     .status("IN_PROGRESS")
///     .assignee_id(Some(developer.id))
///     .build()
///     .await?;
/// ```
pub struct IssueFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    reporter_id: i32,
    title: String,
    description: String,
    status: String,
    priority: String,
    assignee_id: Option<i32>,
    due_date: Option<DateTime<Utc>>,
    due_notified_at: Option<DateTime<Utc>>,
}

impl<'a> IssueFactory<'a> {
    /// Creates a new IssueFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Issue {id}"`
    /// - description: `"Description for issue {id}"`
    /// - status: `"OPEN"`, priority: `"MEDIUM"`
    /// - no assignee, no due date
    pub fn new(db: &'a DatabaseConnection, client_id: i32, reporter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            client_id,
            reporter_id,
            title: format!("Issue {}", id),
            description: format!("Description for issue {}", id),
            status: "OPEN".to_string(),
            priority: "MEDIUM".to_string(),
            assignee_id: None,
            due_date: None,
            due_notified_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn assignee_id(mut self, assignee_id: Option<i32>) -> Self {
        self.assignee_id = assignee_id;
        self
    }

    pub fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn due_notified_at(mut self, due_notified_at: Option<DateTime<Utc>>) -> Self {
        self.due_notified_at = due_notified_at;
        self
    }

    /// Builds and inserts the issue entity into the database.
    pub async fn build(self) -> Result<entity::issue::Model, DbErr> {
        let now = Utc::now();
        entity::issue::ActiveModel {
            client_id: ActiveValue::Set(self.client_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            reporter_id: ActiveValue::Set(self.reporter_id),
            assignee_id: ActiveValue::Set(self.assignee_id),
            due_date: ActiveValue::Set(self.due_date),
            due_notified_at: ActiveValue::Set(self.due_notified_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an OPEN, MEDIUM priority issue for the client.
pub async fn create_issue(
    db: &DatabaseConnection,
    client_id: i32,
    reporter_id: i32,
) -> Result<entity::issue::Model, DbErr> {
    IssueFactory::new(db, client_id, reporter_id).build().await
}
