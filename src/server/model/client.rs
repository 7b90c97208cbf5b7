//! Client organization domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::client::{
    ClientDetailsDto, ClientDto, CreateClientDto, PaginatedClientsDto, UpdateClientDto,
};
use crate::server::model::page::Page;

/// A client organization served by the agency.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    /// Staff member responsible for the client.
    pub account_manager_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            website: entity.website,
            notes: entity.notes,
            account_manager_id: entity.account_manager_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Client together with its account manager's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientWithManager {
    pub client: Client,
    pub account_manager_name: Option<String>,
}

impl ClientWithManager {
    pub fn into_dto(self) -> ClientDto {
        let client = self.client;
        ClientDto {
            id: client.id,
            name: client.name,
            email: client.email,
            phone: client.phone,
            website: client.website,
            notes: client.notes,
            account_manager_id: client.account_manager_id,
            account_manager_name: self.account_manager_name,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl Page<ClientWithManager> {
    pub fn into_dto(self) -> PaginatedClientsDto {
        let page = self.map(ClientWithManager::into_dto);

        PaginatedClientsDto {
            clients: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// Client with issue counts for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetails {
    pub client: ClientWithManager,
    /// Issues not yet resolved or closed.
    pub open_issue_count: u64,
    /// Issues resolved or closed.
    pub closed_issue_count: u64,
}

impl ClientDetails {
    pub fn into_dto(self) -> ClientDetailsDto {
        ClientDetailsDto {
            client: self.client.into_dto(),
            open_issue_count: self.open_issue_count,
            closed_issue_count: self.closed_issue_count,
        }
    }
}

/// Validated fields for creating or replacing a client.
#[derive(Debug, Clone)]
pub struct ClientFieldsParam {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub notes: Option<String>,
    pub account_manager_id: Option<i32>,
}

impl From<CreateClientDto> for ClientFieldsParam {
    fn from(dto: CreateClientDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            website: dto.website,
            notes: dto.notes,
            account_manager_id: dto.account_manager_id,
        }
    }
}

impl From<UpdateClientDto> for ClientFieldsParam {
    fn from(dto: UpdateClientDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            website: dto.website,
            notes: dto.notes,
            account_manager_id: dto.account_manager_id,
        }
    }
}

/// Restricts a client query to what a user may see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientScope {
    /// Every client.
    All,
    /// Only the client with this ID.
    Only(i32),
    /// No clients.
    Nothing,
}

/// Filters accepted by the client list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    /// Case-insensitive substring match on the client name.
    pub search: Option<String>,
    pub account_manager_id: Option<i32>,
}
