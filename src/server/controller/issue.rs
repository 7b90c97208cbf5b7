use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        issue::{
            CreateIssueDto, IssueDto, PaginatedIssuesDto, UpdateIssueAssigneeDto, UpdateIssueDto,
            UpdateIssueStatusDto,
        },
    },
    server::{
        controller::param::IssueListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::issue::IssueService,
        state::AppState,
    },
};

/// Tag for grouping issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issue";

/// Report an issue for a client.
///
/// The reporter is the logged-in user. CLIENT users can only report for their own
/// client, and an initial assignee requires the right to assign issues.
#[utoipa::path(
    post,
    path = "/api/issues",
    tag = ISSUE_TAG,
    request_body = CreateIssueDto,
    responses(
        (status = 201, description = "Created issue", body = IssueDto),
        (status = 400, description = "Invalid issue data", body = ErrorDto),
        (status = 403, description = "Not allowed to assign", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let issue = IssueService::new(&state.db).create(&actor, payload).await?;

    Ok((StatusCode::CREATED, Json(issue.into_dto())))
}

/// List the issues visible to the user, newest first.
#[utoipa::path(
    get,
    path = "/api/issues",
    tag = ISSUE_TAG,
    params(IssueListQuery),
    responses(
        (status = 200, description = "Page of issues", body = PaginatedIssuesDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IssueListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (filter, page, per_page) = params.into_parts()?;
    let issues = IssueService::new(&state.db)
        .get_paginated(&actor, filter, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(issues.into_dto())))
}

/// Get an issue with its client, reporter and assignee names.
#[utoipa::path(
    get,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Issue", body = IssueDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewIssue(id)])
        .await?;

    let issue = IssueService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Update title, description, priority or due date.
///
/// Omitted fields stay unchanged; `"due_date": null` clears the due date.
#[utoipa::path(
    put,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = UpdateIssueDto,
    responses(
        (status = 200, description = "Updated issue", body = IssueDto),
        (status = 400, description = "Invalid issue data", body = ErrorDto),
        (status = 403, description = "Not allowed to edit", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIssueDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::EditIssue(id)])
        .await?;

    let issue = IssueService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Move an issue through the status workflow.
#[utoipa::path(
    put,
    path = "/api/issues/{id}/status",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = UpdateIssueStatusDto,
    responses(
        (status = 200, description = "Updated issue", body = IssueDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 403, description = "Not allowed to change status", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIssueStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ChangeIssueStatus(id)])
        .await?;

    let issue = IssueService::new(&state.db)
        .update_status(&actor, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Assign an issue to a staff member, or clear the assignee with `null`.
#[utoipa::path(
    put,
    path = "/api/issues/{id}/assignee",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = UpdateIssueAssigneeDto,
    responses(
        (status = 200, description = "Updated issue", body = IssueDto),
        (status = 400, description = "Assignee is not staff", body = ErrorDto),
        (status = 403, description = "Not allowed to assign", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue_assignee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIssueAssigneeDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AssignIssue(id)])
        .await?;

    let issue = IssueService::new(&state.db)
        .update_assignee(&actor, id, payload.assignee_id)
        .await?;

    Ok((StatusCode::OK, Json(issue.into_dto())))
}

/// Delete an issue with its comments and files.
#[utoipa::path(
    delete,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 204, description = "Issue deleted"),
        (status = 403, description = "Not allowed to delete", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteIssue(id)])
        .await?;

    IssueService::new(&state.db).delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
