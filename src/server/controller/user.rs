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
        user::{PaginatedUsersDto, UpdateUserClientDto, UpdateUserRoleDto, UserDto},
    },
    server::{
        controller::param::UserListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users ordered by name.
///
/// # Access Control
/// - `Staff` - Admins, account managers and developers
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let (role, page, per_page) = params.into_parts()?;
    let users = UserService::new(&state.db)
        .get_paginated(role, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// List users that issues can be assigned to.
#[utoipa::path(
    get,
    path = "/api/users/assignable",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Staff users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignable_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let users: Vec<UserDto> = UserService::new(&state.db)
        .get_assignable()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Change a user's role.
///
/// Moving a user off `USER` approves their account. Admins cannot change their own
/// role.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Admin changing their own role", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update_role(&actor, id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Link a CLIENT user to a client, or unlink with `null`.
///
/// # Access Control
/// - Admins, or the account manager of the affected client
#[utoipa::path(
    put,
    path = "/api/users/{id}/client",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserClientDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "User is not a CLIENT", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the client", body = ErrorDto),
        (status = 404, description = "User or client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_client(&actor, id, payload.client_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
