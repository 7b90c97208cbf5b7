//! Issue data repository.
//!
//! Besides CRUD this repository applies the visibility scopes used by the issue list
//! and selects the issues the due-date scheduler has to notify about.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::issue::IssueStatus,
    server::{
        error::AppError,
        model::{
            issue::{CreateIssueParam, Issue, IssueFilter, IssueScope, UpdateIssueParam},
            page::Page,
        },
    },
};

pub struct IssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IssueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new issue in the OPEN status.
    pub async fn create(&self, param: CreateIssueParam) -> Result<Issue, AppError> {
        let now = Utc::now();
        let entity = entity::issue::ActiveModel {
            client_id: ActiveValue::Set(param.client_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(IssueStatus::Open.as_str().to_string()),
            priority: ActiveValue::Set(param.priority.as_str().to_string()),
            reporter_id: ActiveValue::Set(param.reporter_id),
            assignee_id: ActiveValue::Set(param.assignee_id),
            due_date: ActiveValue::Set(param.due_date),
            due_notified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Issue::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Issue>, AppError> {
        let entity = entity::prelude::Issue::find_by_id(id).one(self.db).await?;

        entity.map(Issue::from_entity).transpose()
    }

    /// Gets issues within `scope` matching `filter`, newest first.
    ///
    /// # Arguments
    /// - `scope` - Visibility restriction derived from the requesting user
    /// - `filter` - Optional client, status, priority and assignee filters
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of issues per page
    pub async fn get_paginated(
        &self,
        scope: IssueScope,
        filter: IssueFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Issue>, AppError> {
        let Some(scope_condition) = scope_condition(&scope) else {
            return Ok(Page::new(Vec::new(), 0, page, per_page));
        };

        let mut query = entity::prelude::Issue::find().filter(scope_condition);

        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::issue::Column::ClientId.eq(client_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::issue::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::issue::Column::Priority.eq(priority.as_str()));
        }
        if let Some(assignee_id) = filter.assignee_id {
            query = query.filter(entity::issue::Column::AssigneeId.eq(assignee_id));
        }

        let paginator = query
            .order_by_desc(entity::issue::Column::CreatedAt)
            .order_by_desc(entity::issue::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let issues = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(issues, total, page, per_page))
    }

    /// Applies a partial update of title, description, priority and due date.
    ///
    /// Changing the due date clears `due_notified_at` so the new date is notified again.
    ///
    /// # Returns
    /// - `Ok(Some(Issue))` - The updated issue
    /// - `Ok(None)` - No issue with that ID
    pub async fn update(&self, id: i32, param: UpdateIssueParam) -> Result<Option<Issue>, AppError> {
        let Some(issue) = entity::prelude::Issue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let current_due_date = issue.due_date;
        let mut active_model: entity::issue::ActiveModel = issue.into();

        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(priority) = param.priority {
            active_model.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(due_date) = param.due_date {
            if due_date != current_due_date {
                active_model.due_date = ActiveValue::Set(due_date);
                active_model.due_notified_at = ActiveValue::Set(None);
            }
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Issue::from_entity(entity).map(Some)
    }

    /// Sets an issue's status. Transition rules are enforced by the service.
    pub async fn update_status(
        &self,
        id: i32,
        status: IssueStatus,
    ) -> Result<Option<Issue>, AppError> {
        let Some(issue) = entity::prelude::Issue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::issue::ActiveModel = issue.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Issue::from_entity(entity).map(Some)
    }

    /// Sets or clears an issue's assignee.
    pub async fn update_assignee(
        &self,
        id: i32,
        assignee_id: Option<i32>,
    ) -> Result<Option<Issue>, AppError> {
        let Some(issue) = entity::prelude::Issue::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::issue::ActiveModel = issue.into();
        active_model.assignee_id = ActiveValue::Set(assignee_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Issue::from_entity(entity).map(Some)
    }

    /// Deletes an issue together with its comments, files and notifications.
    ///
    /// # Returns
    /// - `Ok(true)` - The issue was deleted
    /// - `Ok(false)` - No issue with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Issue::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds unfinished issues due on or before `cutoff` that have not been notified.
    ///
    /// Already overdue issues are included.
    pub async fn find_due_unnotified(&self, cutoff: DateTime<Utc>) -> Result<Vec<Issue>, AppError> {
        let done = IssueStatus::done_values();

        entity::prelude::Issue::find()
            .filter(entity::issue::Column::DueDate.is_not_null())
            .filter(entity::issue::Column::DueDate.lte(cutoff))
            .filter(entity::issue::Column::DueNotifiedAt.is_null())
            .filter(entity::issue::Column::Status.is_not_in(done))
            .order_by_asc(entity::issue::Column::DueDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Issue::from_entity)
            .collect()
    }

    /// Records that the due-soon notification for an issue has been sent.
    pub async fn mark_due_notified(&self, id: i32, at: DateTime<Utc>) -> Result<(), AppError> {
        entity::prelude::Issue::update_many()
            .col_expr(entity::issue::Column::DueNotifiedAt, Expr::value(at))
            .filter(entity::issue::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

/// Builds the WHERE condition for a visibility scope.
///
/// Returns `None` for `IssueScope::Nothing`.
fn scope_condition(scope: &IssueScope) -> Option<Condition> {
    use entity::issue::Column;

    let condition = match *scope {
        IssueScope::All => Condition::all(),
        IssueScope::ManagedBy(user_id) => Condition::any()
            .add(
                Column::ClientId.in_subquery(
                    Query::select()
                        .column(entity::client::Column::Id)
                        .from(entity::client::Entity)
                        .and_where(entity::client::Column::AccountManagerId.eq(user_id))
                        .to_owned(),
                ),
            )
            .add(Column::ReporterId.eq(user_id)),
        IssueScope::AssignedOrReported(user_id) => Condition::any()
            .add(Column::AssigneeId.eq(user_id))
            .add(Column::ReporterId.eq(user_id)),
        IssueScope::ClientOrReported { client_id, user_id } => Condition::any()
            .add(Column::ClientId.eq(client_id))
            .add(Column::ReporterId.eq(user_id)),
        IssueScope::ReportedBy(user_id) => Condition::all().add(Column::ReporterId.eq(user_id)),
        IssueScope::Nothing => return None,
    };

    Some(condition)
}
