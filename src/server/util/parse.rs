use crate::{
    model::{
        issue::{IssuePriority, IssueStatus},
        notification::NotificationKind,
        user::Role,
    },
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored role column.
///
/// # Returns
/// - `Ok(Role)` - Recognised role
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - Unknown value in the database
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    Role::parse(value).ok_or_else(|| unknown("role", value))
}

/// Parses a stored issue status column.
pub fn parse_status(value: &str) -> Result<IssueStatus, AppError> {
    IssueStatus::parse(value).ok_or_else(|| unknown("issue status", value))
}

/// Parses a stored issue priority column.
pub fn parse_priority(value: &str) -> Result<IssuePriority, AppError> {
    IssuePriority::parse(value).ok_or_else(|| unknown("issue priority", value))
}

/// Parses a stored notification kind column.
pub fn parse_notification_kind(value: &str) -> Result<NotificationKind, AppError> {
    NotificationKind::parse(value).ok_or_else(|| unknown("notification kind", value))
}

fn unknown(kind: &'static str, value: &str) -> AppError {
    InternalError::UnknownEnumValue {
        kind,
        value: value.to_string(),
    }
    .into()
}
