use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of a user, determining authorization outcomes.
///
/// New users start as `User` and have no access to client or issue data until an
/// admin assigns one of the other roles.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    AccountManager,
    Developer,
    Client,
    User,
}

impl Role {
    /// Stored and serialized representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::AccountManager => "ACCOUNT_MANAGER",
            Self::Developer => "DEVELOPER",
            Self::Client => "CLIENT",
            Self::User => "USER",
        }
    }

    /// Parses the stored representation, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "ACCOUNT_MANAGER" => Some(Self::AccountManager),
            "DEVELOPER" => Some(Self::Developer),
            "CLIENT" => Some(Self::Client),
            "USER" => Some(Self::User),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub client_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateUserRoleDto {
    pub role: Role,
}

/// Links a CLIENT user to a client organization, or unlinks it with `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateUserClientDto {
    pub client_id: Option<i32>,
}
