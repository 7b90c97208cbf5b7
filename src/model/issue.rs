use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

/// Lifecycle status of an issue.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    InProgress,
    InReview,
    Resolved,
    Closed,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 5] = [
        Self::Open,
        Self::InProgress,
        Self::InReview,
        Self::Resolved,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::InReview => "IN_REVIEW",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OPEN" => Some(Self::Open),
            "IN_PROGRESS" => Some(Self::InProgress),
            "IN_REVIEW" => Some(Self::InReview),
            "RESOLVED" => Some(Self::Resolved),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Whether the status counts as finished work.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Stored values of every status for which `is_done` holds.
    pub fn done_values() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .filter(|status| status.is_done())
            .map(IssueStatus::as_str)
            .collect()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "URGENT" => Some(Self::Urgent),
            _ => None,
        }
    }
}

impl Default for IssuePriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct IssueDto {
    pub id: i32,
    pub client_id: i32,
    pub client_name: String,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub reporter_id: i32,
    pub reporter_name: String,
    pub assignee_id: Option<i32>,
    pub assignee_name: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedIssuesDto {
    pub issues: Vec<IssueDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateIssueDto {
    pub client_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<IssuePriority>,
    #[serde(default)]
    pub assignee_id: Option<i32>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update of an issue's editable fields.
///
/// Absent fields are left unchanged. `due_date: null` clears the due date.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct UpdateIssueDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<IssuePriority>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateIssueStatusDto {
    pub status: IssueStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateIssueAssigneeDto {
    pub assignee_id: Option<i32>,
}
