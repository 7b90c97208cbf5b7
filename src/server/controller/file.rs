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
        file::{CreateFileDto, FileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::file::FileService,
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// List an issue's attachments, newest first.
#[utoipa::path(
    get,
    path = "/api/issues/{id}/files",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Attachments", body = Vec<FileDto>),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_files(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewIssue(issue_id)])
        .await?;

    let files: Vec<FileDto> = FileService::new(&state.db)
        .get_by_issue(issue_id)
        .await?
        .into_iter()
        .map(|f| f.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(files)))
}

/// Record an attachment already uploaded to object storage.
#[utoipa::path(
    post,
    path = "/api/issues/{id}/files",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "Issue ID")),
    request_body = CreateFileDto,
    responses(
        (status = 201, description = "Recorded attachment", body = FileDto),
        (status = 400, description = "Invalid file metadata", body = ErrorDto),
        (status = 404, description = "Issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_file(
    State(state): State<AppState>,
    session: Session,
    Path(issue_id): Path<i32>,
    Json(payload): Json<CreateFileDto>,
) -> Result<impl IntoResponse, AppError> {
    let uploader = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewIssue(issue_id)])
        .await?;

    let file = FileService::new(&state.db)
        .create(&uploader, issue_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(file.into_dto())))
}

/// Delete an attachment record.
///
/// # Access Control
/// - The uploader, admins, and the client's account manager
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 403, description = "Not allowed to delete", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteFile(id)])
        .await?;

    FileService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
