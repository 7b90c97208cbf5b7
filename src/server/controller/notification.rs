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
        notification::{PaginatedNotificationsDto, UnreadCountDto},
    },
    server::{
        controller::param::NotificationListQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationListQuery),
    responses(
        (status = 200, description = "Page of notifications", body = PaginatedNotificationsDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NotificationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (unread_only, page, per_page) = params.into_parts()?;
    let notifications = NotificationService::new(&state.db)
        .get_paginated(&user, unread_only, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of unread notifications", body = UnreadCountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = NotificationService::new(&state.db)
        .unread_count(&user)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { count })))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_read(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications marked as read", body = UnreadCountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let count = NotificationService::new(&state.db)
        .mark_all_read(&user)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { count })))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
