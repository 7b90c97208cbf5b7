//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, Role, UserDto},
    server::{error::AppError, model::page::Page, util::parse::parse_role},
};

/// Authenticated user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject identifier issued by the identity provider.
    pub provider_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Client organization a CLIENT user belongs to.
    pub client_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            client_id: self.client_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            provider_id: entity.provider_id,
            email: entity.email,
            name: entity.name,
            role: parse_role(&entity.role)?,
            client_id: entity.client_id,
            created_at: entity.created_at,
        })
    }
}

impl Page<User> {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let page = self.map(User::into_dto);

        PaginatedUsersDto {
            users: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// Parameters for upserting a user after a successful login.
///
/// `role` is only written when `Some`, so logging in never demotes an existing user.
/// New users default to `Role::User`.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub provider_id: String,
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
}
