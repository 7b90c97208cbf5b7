//! Issue domain models, parameters and the status transition table.

use chrono::{DateTime, Utc};

use crate::{
    model::issue::{
        CreateIssueDto, IssueDto, IssuePriority, IssueStatus, PaginatedIssuesDto, UpdateIssueDto,
    },
    server::{
        error::AppError,
        model::page::Page,
        util::parse::{parse_priority, parse_status},
    },
};

/// Statuses reachable from `from` in a single step.
///
/// Staying in the same status is handled separately by [`is_valid_status_transition`].
pub fn allowed_transitions(from: IssueStatus) -> &'static [IssueStatus] {
    use IssueStatus::*;

    match from {
        Open => &[InProgress, Closed],
        InProgress => &[Open, InReview, Resolved],
        InReview => &[InProgress, Resolved],
        Resolved => &[Closed, Open],
        Closed => &[Open],
    }
}

/// Whether an issue may move from `from` to `to`.
///
/// Setting the current status again is always allowed and is treated as a no-op.
pub fn is_valid_status_transition(from: IssueStatus, to: IssueStatus) -> bool {
    from == to || allowed_transitions(from).contains(&to)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub client_id: i32,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub reporter_id: i32,
    pub assignee_id: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
    /// When the due-soon notification was sent for the current due date.
    pub due_notified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Converts an entity model to an issue domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Issue)` - The converted issue
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - Stored status or priority is not recognised
    pub fn from_entity(entity: entity::issue::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            client_id: entity.client_id,
            title: entity.title,
            description: entity.description,
            status: parse_status(&entity.status)?,
            priority: parse_priority(&entity.priority)?,
            reporter_id: entity.reporter_id,
            assignee_id: entity.assignee_id,
            due_date: entity.due_date,
            due_notified_at: entity.due_notified_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Issue together with the display names the API returns alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueWithNames {
    pub issue: Issue,
    pub client_name: String,
    pub reporter_name: String,
    pub assignee_name: Option<String>,
}

impl IssueWithNames {
    pub fn into_dto(self) -> IssueDto {
        let issue = self.issue;
        IssueDto {
            id: issue.id,
            client_id: issue.client_id,
            client_name: self.client_name,
            title: issue.title,
            description: issue.description,
            status: issue.status,
            priority: issue.priority,
            reporter_id: issue.reporter_id,
            reporter_name: self.reporter_name,
            assignee_id: issue.assignee_id,
            assignee_name: self.assignee_name,
            due_date: issue.due_date,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

impl Page<IssueWithNames> {
    pub fn into_dto(self) -> PaginatedIssuesDto {
        let page = self.map(IssueWithNames::into_dto);

        PaginatedIssuesDto {
            issues: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// Filters accepted by the issue list endpoint.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub client_id: Option<i32>,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assignee_id: Option<i32>,
}

/// Restricts an issue query to what a user may see.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueScope {
    /// Every issue.
    All,
    /// Issues of clients managed by this user, plus issues they reported.
    ManagedBy(i32),
    /// Issues assigned to or reported by this user.
    AssignedOrReported(i32),
    /// Issues of this client, plus issues reported by the user.
    ClientOrReported { client_id: i32, user_id: i32 },
    /// Issues reported by this user.
    ReportedBy(i32),
    /// No issues.
    Nothing,
}

#[derive(Debug, Clone)]
pub struct CreateIssueParam {
    pub client_id: i32,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub reporter_id: i32,
    pub assignee_id: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateIssueParam {
    /// Builds the unvalidated parameters, taking the reporter from the session user.
    pub fn from_dto(dto: CreateIssueDto, reporter_id: i32) -> Self {
        Self {
            client_id: dto.client_id,
            title: dto.title,
            description: dto.description,
            priority: dto.priority.unwrap_or_default(),
            reporter_id,
            assignee_id: dto.assignee_id,
            due_date: dto.due_date,
        }
    }
}

/// Partial update of an issue's editable fields.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default)]
pub struct UpdateIssueParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<IssuePriority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateIssueDto> for UpdateIssueParam {
    fn from(dto: UpdateIssueDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            priority: dto.priority,
            due_date: dto.due_date,
        }
    }
}
