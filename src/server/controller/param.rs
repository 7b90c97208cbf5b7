//! Query parameters shared by the list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        issue::{IssuePriority, IssueStatus},
        user::Role,
    },
    server::{
        error::AppError,
        model::{client::ClientFilter, issue::IssueFilter},
    },
};

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Clamps a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Validates a page request and returns `(page, per_page)` with the page size clamped.
///
/// The row offset `page * per_page` must fit in an `i64`, the largest offset SQLite
/// accepts.
pub fn page_window(page: u64, per_page: u64) -> Result<(u64, u64), AppError> {
    let per_page = clamp_per_page(per_page);

    match page.checked_mul(per_page) {
        Some(offset) if offset <= i64::MAX as u64 => Ok((page, per_page)),
        _ => Err(AppError::BadRequest(format!("Page {} is out of range", page))),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Only users holding this role.
    pub role: Option<Role>,
    /// Page number, starting at 0.
    #[serde(default)]
    pub page: u64,
    /// Items per page, 1 to 100 (default 10).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl UserListQuery {
    pub fn into_parts(self) -> Result<(Option<Role>, u64, u64), AppError> {
        let (page, per_page) = page_window(self.page, self.per_page)?;

        Ok((self.role, page, per_page))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientListQuery {
    /// Substring of the client name.
    pub search: Option<String>,
    pub account_manager_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl ClientListQuery {
    pub fn into_parts(self) -> Result<(ClientFilter, u64, u64), AppError> {
        let (page, per_page) = page_window(self.page, self.per_page)?;
        let filter = ClientFilter {
            search: self.search,
            account_manager_id: self.account_manager_id,
        };

        Ok((filter, page, per_page))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IssueListQuery {
    pub client_id: Option<i32>,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assignee_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl IssueListQuery {
    pub fn into_parts(self) -> Result<(IssueFilter, u64, u64), AppError> {
        let (page, per_page) = page_window(self.page, self.per_page)?;
        let filter = IssueFilter {
            client_id: self.client_id,
            status: self.status,
            priority: self.priority,
            assignee_id: self.assignee_id,
        };

        Ok((filter, page, per_page))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationListQuery {
    /// Only unread notifications.
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl NotificationListQuery {
    pub fn into_parts(self) -> Result<(bool, u64, u64), AppError> {
        let (page, per_page) = page_window(self.page, self.per_page)?;

        Ok((self.unread_only, page, per_page))
    }
}
