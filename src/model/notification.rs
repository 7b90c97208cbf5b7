use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Event that produced a notification.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    IssueAssigned,
    StatusChanged,
    CommentAdded,
    DueSoon,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueAssigned => "ISSUE_ASSIGNED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::CommentAdded => "COMMENT_ADDED",
            Self::DueSoon => "DUE_SOON",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ISSUE_ASSIGNED" => Some(Self::IssueAssigned),
            "STATUS_CHANGED" => Some(Self::StatusChanged),
            "COMMENT_ADDED" => Some(Self::CommentAdded),
            "DUE_SOON" => Some(Self::DueSoon),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub issue_id: Option<i32>,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UnreadCountDto {
    pub count: u64,
}
