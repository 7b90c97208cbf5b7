//! Notification feed and fan-out.
//!
//! Issue activity is written straight into the notification table of each recipient.
//! Delivery is best effort: there is no queue and no retry. The feed operations only
//! ever touch the requesting user's own notifications.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{issue::IssueStatus, notification::NotificationKind},
    server::{
        data::{issue::IssueRepository, notification::NotificationRepository},
        error::AppError,
        model::{
            issue::Issue,
            notification::{CreateNotificationParam, Notification},
            page::Page,
            user::User,
        },
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        user: &User,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Notification>, AppError> {
        NotificationRepository::new(self.db)
            .get_paginated_for_user(user.id, unread_only, page, per_page)
            .await
    }

    pub async fn unread_count(&self, user: &User) -> Result<u64, AppError> {
        NotificationRepository::new(self.db).count_unread(user.id).await
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such notification owned by the user
    pub async fn mark_read(&self, user: &User, id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db).mark_read(id, user.id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Marks all of the user's notifications as read, returning how many changed.
    pub async fn mark_all_read(&self, user: &User) -> Result<u64, AppError> {
        NotificationRepository::new(self.db).mark_all_read(user.id).await
    }

    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db).delete(id, user.id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Notifies the new assignee unless they assigned themselves.
    pub async fn notify_assigned(&self, issue: &Issue, actor: &User) -> Result<u64, AppError> {
        let recipients = recipients([issue.assignee_id], actor.id);

        self.fan_out(
            recipients,
            issue.id,
            NotificationKind::IssueAssigned,
            format!("{} assigned you to \"{}\"", actor.name, issue.title),
        )
        .await
    }

    /// Notifies reporter and assignee of a status change, excluding the actor.
    pub async fn notify_status_changed(
        &self,
        issue: &Issue,
        from: IssueStatus,
        actor: &User,
    ) -> Result<u64, AppError> {
        let recipients = recipients([Some(issue.reporter_id), issue.assignee_id], actor.id);

        self.fan_out(
            recipients,
            issue.id,
            NotificationKind::StatusChanged,
            format!(
                "{} moved \"{}\" from {} to {}",
                actor.name,
                issue.title,
                from.as_str(),
                issue.status.as_str()
            ),
        )
        .await
    }

    /// Notifies reporter and assignee of a new comment, excluding the author.
    pub async fn notify_comment_added(&self, issue: &Issue, author: &User) -> Result<u64, AppError> {
        let recipients = recipients([Some(issue.reporter_id), issue.assignee_id], author.id);

        self.fan_out(
            recipients,
            issue.id,
            NotificationKind::CommentAdded,
            format!("{} commented on \"{}\"", author.name, issue.title),
        )
        .await
    }

    /// Emits due-soon notifications for unfinished issues due within `window` of `now`.
    ///
    /// The assignee is notified, or the reporter when nobody is assigned. Each issue is
    /// stamped with `now` in the same transaction as its notification, so it is notified
    /// once per due date.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of issues notified
    /// - `Err(AppError::InternalErr)` - `now + window` is not a representable time
    pub async fn process_due_soon(&self, now: DateTime<Utc>, window: Duration) -> Result<u64, AppError> {
        let cutoff = now
            .checked_add_signed(window)
            .ok_or(InternalError::TimeOutOfRange {
                base: now,
                hours: window.num_hours(),
            })?;

        let issues = IssueRepository::new(self.db)
            .find_due_unnotified(cutoff)
            .await?;
        let mut notified = 0;

        for issue in issues {
            let Some(due_date) = issue.due_date else {
                continue;
            };

            let message = if due_date <= now {
                format!("\"{}\" is overdue", issue.title)
            } else {
                format!(
                    "\"{}\" is due {}",
                    issue.title,
                    due_date.format("%Y-%m-%d %H:%M UTC")
                )
            };

            let txn = self.db.begin().await?;
            NotificationRepository::new(&txn)
                .create_many(vec![CreateNotificationParam {
                    user_id: issue.assignee_id.unwrap_or(issue.reporter_id),
                    issue_id: Some(issue.id),
                    kind: NotificationKind::DueSoon,
                    message,
                }])
                .await?;
            IssueRepository::new(&txn)
                .mark_due_notified(issue.id, now)
                .await?;
            txn.commit().await?;

            notified += 1;
        }

        Ok(notified)
    }

    async fn fan_out(
        &self,
        recipients: Vec<i32>,
        issue_id: i32,
        kind: NotificationKind,
        message: String,
    ) -> Result<u64, AppError> {
        let params = recipients
            .into_iter()
            .map(|user_id| CreateNotificationParam {
                user_id,
                issue_id: Some(issue_id),
                kind,
                message: message.clone(),
            })
            .collect();

        NotificationRepository::new(self.db).create_many(params).await
    }
}

/// Deduplicated recipients without the actor.
fn recipients<const N: usize>(candidates: [Option<i32>; N], actor_id: i32) -> Vec<i32> {
    let mut recipients: Vec<i32> = Vec::with_capacity(N);

    for user_id in candidates.into_iter().flatten() {
        if user_id != actor_id && !recipients.contains(&user_id) {
            recipients.push(user_id);
        }
    }

    recipients
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Notification {} not found", id))
}
