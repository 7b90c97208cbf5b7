use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DomainNameDto {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub registrar: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateDomainNameDto {
    pub name: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateDomainNameDto {
    pub name: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}
