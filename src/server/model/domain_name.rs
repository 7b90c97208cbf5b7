use chrono::{DateTime, Utc};

use crate::model::domain_name::{CreateDomainNameDto, DomainNameDto, UpdateDomainNameDto};

/// Internet domain registered on behalf of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainName {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub registrar: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DomainName {
    pub fn into_dto(self) -> DomainNameDto {
        DomainNameDto {
            id: self.id,
            client_id: self.client_id,
            name: self.name,
            registrar: self.registrar,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::domain_name::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            name: entity.name,
            registrar: entity.registrar,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DomainNameFieldsParam {
    pub name: String,
    pub registrar: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<CreateDomainNameDto> for DomainNameFieldsParam {
    fn from(dto: CreateDomainNameDto) -> Self {
        Self {
            name: dto.name,
            registrar: dto.registrar,
            expires_at: dto.expires_at,
        }
    }
}

impl From<UpdateDomainNameDto> for DomainNameFieldsParam {
    fn from(dto: UpdateDomainNameDto) -> Self {
        Self {
            name: dto.name,
            registrar: dto.registrar,
            expires_at: dto.expires_at,
        }
    }
}
