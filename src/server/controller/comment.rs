use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List an issue's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/issues/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewIssue(issue_id)])
        .await?;

    let comments: Vec<CommentDto> = CommentService::new(&state.db)
        .get_by_issue(issue_id)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on an issue. Notifies the reporter and assignee.
#[utoipa::path(
    post,
    path = "/api/issues/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Created comment", body = CommentDto),
        (status = 400, description = "Invalid comment body", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewIssue(issue_id)])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(&author, issue_id, payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit a comment. Only its author may do so.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Invalid comment body", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EditComment(id)])
        .await?;

    let comment = CommentService::new(&state.db)
        .update(&author, id, payload.body)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - The author, admins, and the client's account manager
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Not allowed to delete", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteComment(id)])
        .await?;

    CommentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
