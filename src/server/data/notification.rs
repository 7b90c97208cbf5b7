//! Notification data repository.
//!
//! Every read and write except `create_many` is scoped to the owning user, so a
//! notification ID belonging to someone else behaves exactly like a missing one.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        notification::{CreateNotificationParam, Notification},
        page::Page,
    },
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts unread notifications in a single statement.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications inserted (0 when `params` is empty)
    pub async fn create_many(&self, params: Vec<CreateNotificationParam>) -> Result<u64, AppError> {
        if params.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let count = params.len() as u64;
        let models = params.into_iter().map(|param| entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            issue_id: ActiveValue::Set(param.issue_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Notification::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }

    /// Gets a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the notifications
    /// - `unread_only` - Only return unread notifications
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    pub async fn get_paginated_for_user(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Notification>, AppError> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(notifications, total, page, per_page))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(true)` - The notification exists and belongs to the user
    /// - `Ok(false)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks all of the user's unread notifications as read.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications that changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes one of the user's notifications.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
