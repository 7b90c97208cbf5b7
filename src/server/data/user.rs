//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating users on login, looking them up for
//! session authentication, and the role and client-link changes made by admins.

use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::{
            page::Page,
            user::{UpsertUserParam, User},
        },
    },
};

/// Roles that may be assigned to work on issues.
pub const STAFF_ROLES: [Role; 3] = [Role::Admin, Role::AccountManager, Role::Developer];

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user or refreshes an existing user's profile.
    ///
    /// Matches on `provider_id`. Email and name are always refreshed from the identity
    /// provider. The role column is only overwritten when `param.role` is `Some`, so
    /// regular logins never change an existing user's role.
    ///
    /// # Arguments
    /// - `param` - Provider identity, profile fields and optional role override
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let mut update_columns = vec![entity::user::Column::Email, entity::user::Column::Name];

        if param.role.is_some() {
            update_columns.push(entity::user::Column::Role);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            provider_id: ActiveValue::Set(param.provider_id),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role.unwrap_or(Role::User).as_str().to_string()),
            client_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ProviderId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by the subject identifier issued by the identity provider.
    pub async fn find_by_provider_id(&self, provider_id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ProviderId.eq(provider_id))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks if any user holds the ADMIN role.
    ///
    /// Used at startup to decide whether an admin bootstrap code must be issued.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `role` - Only return users holding this role, when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn get_all_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<User>, AppError> {
        let mut query = entity::prelude::User::find();
        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(users, total, page, per_page))
    }

    /// Gets every staff user (admin, account manager or developer), ordered by name.
    ///
    /// These are the users an issue may be assigned to.
    pub async fn get_staff(&self) -> Result<Vec<User>, AppError> {
        let roles: Vec<&str> = STAFF_ROLES.iter().map(|r| r.as_str()).collect();

        entity::prelude::User::find()
            .filter(entity::user::Column::Role.is_in(roles))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_role(&self, id: i32, role: Role) -> Result<Option<User>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());
        let entity = active_model.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Links a user to a client organization, or unlinks it with `None`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_client(
        &self,
        id: i32,
        client_id: Option<i32>,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.client_id = ActiveValue::Set(client_id);
        let entity = active_model.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Clears the client link of every user linked to `client_id`.
    ///
    /// Called when a client is deleted, since `user.client_id` has no foreign key.
    pub async fn unlink_client(&self, client_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ClientId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::ClientId.eq(client_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets display names for the given user IDs.
    ///
    /// Duplicate IDs are allowed. IDs with no matching user are absent from the map.
    pub async fn get_names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .column(entity::user::Column::Name)
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
