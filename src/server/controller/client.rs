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
        client::{
            ClientDetailsDto, ClientDto, CreateClientDto, PaginatedClientsDto, UpdateClientDto,
        },
    },
    server::{
        controller::param::ClientListQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Create a client.
///
/// Account managers become the manager of the client they create. Admins may set
/// `account_manager_id` to any account manager or admin.
///
/// # Access Control
/// - `CreateClient` - Admins and account managers
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 403, description = "Not allowed to create clients", body = ErrorDto),
        (status = 409, description = "Client name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CreateClient])
        .await?;

    let client = ClientService::new(&state.db).create(&actor, payload).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// List the clients visible to the user, ordered by name.
///
/// CLIENT users only see their own organization.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(ClientListQuery),
    responses(
        (status = 200, description = "Page of clients", body = PaginatedClientsDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ClientListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (filter, page, per_page) = params.into_parts()?;
    let clients = ClientService::new(&state.db)
        .get_paginated(&actor, filter, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(clients.into_dto())))
}

/// Get a client with its open and closed issue counts.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClientDetailsDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewClient(id)])
        .await?;

    let details = ClientService::new(&state.db)
        .get_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Update a client.
///
/// Only admins can reassign the account manager; the submitted value is ignored
/// for account managers.
///
/// # Access Control
/// - `ManageClient` - Admins and the client's account manager
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the client", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Client name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageClient(id)])
        .await?;

    let client = ClientService::new(&state.db)
        .update(&actor, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete a client with its issues and domains. Linked CLIENT users are unlinked.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ClientService::new(&state.db).delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
