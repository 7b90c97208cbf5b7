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
        domain_name::{CreateDomainNameDto, DomainNameDto, UpdateDomainNameDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::domain_name::DomainNameService,
        state::AppState,
    },
};

/// Tag for grouping domain name endpoints in OpenAPI documentation
pub static DOMAIN_NAME_TAG: &str = "domain_name";

/// List a client's domain names ordered by name.
#[utoipa::path(
    get,
    path = "/api/clients/{id}/domains",
    tag = DOMAIN_NAME_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Domain names", body = Vec<DomainNameDto>),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_domain_names(
    State(state): State<AppState>,
    session: Session,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewClient(client_id)])
        .await?;

    let domains: Vec<DomainNameDto> = DomainNameService::new(&state.db)
        .get_by_client(client_id)
        .await?
        .into_iter()
        .map(|d| d.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(domains)))
}

/// Register a domain name for a client.
///
/// The name is lowercased and must be unique.
#[utoipa::path(
    post,
    path = "/api/clients/{id}/domains",
    tag = DOMAIN_NAME_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = CreateDomainNameDto,
    responses(
        (status = 201, description = "Created domain name", body = DomainNameDto),
        (status = 400, description = "Invalid domain name", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the client", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Domain already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_domain_name(
    State(state): State<AppState>,
    session: Session,
    Path(client_id): Path<i32>,
    Json(payload): Json<CreateDomainNameDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageClient(client_id)])
        .await?;

    let domain = DomainNameService::new(&state.db)
        .create(client_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(domain.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/domains/{id}",
    tag = DOMAIN_NAME_TAG,
    params(("id" = i32, Path, description = "Domain name ID")),
    request_body = UpdateDomainNameDto,
    responses(
        (status = 200, description = "Updated domain name", body = DomainNameDto),
        (status = 400, description = "Invalid domain name", body = ErrorDto),
        (status = 403, description = "Not allowed to manage the client", body = ErrorDto),
        (status = 404, description = "Domain name not found", body = ErrorDto),
        (status = 409, description = "Domain already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_domain_name(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDomainNameDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageDomain(id)])
        .await?;

    let domain = DomainNameService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(domain.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/domains/{id}",
    tag = DOMAIN_NAME_TAG,
    params(("id" = i32, Path, description = "Domain name ID")),
    responses(
        (status = 204, description = "Domain name deleted"),
        (status = 403, description = "Not allowed to manage the client", body = ErrorDto),
        (status = 404, description = "Domain name not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_domain_name(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageDomain(id)])
        .await?;

    DomainNameService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
