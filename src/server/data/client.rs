//! Client data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::issue::IssueStatus,
    server::{
        data::conflict_on_unique,
        error::AppError,
        model::{
            client::{Client, ClientFieldsParam, ClientFilter, ClientScope},
            page::Page,
        },
    },
};

/// Repository providing database operations for client organizations.
pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a client from already validated fields.
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(AppError::Conflict)` - Another client already has the name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: ClientFieldsParam) -> Result<Client, AppError> {
        let now = Utc::now();
        let name = param.name.clone();
        let entity = entity::client::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            website: ActiveValue::Set(param.website),
            notes: ActiveValue::Set(param.notes),
            account_manager_id: ActiveValue::Set(param.account_manager_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| conflict_on_unique(e, || duplicate_name(&name)))?;

        Ok(Client::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Finds a client by exact name.
    ///
    /// Used to reject duplicate names before insert or rename.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Client>, AppError> {
        let entity = entity::prelude::Client::find()
            .filter(entity::client::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Gets clients visible within `scope`, ordered by name.
    ///
    /// # Arguments
    /// - `scope` - Visibility restriction derived from the requesting user
    /// - `filter` - Optional name search and account manager filter
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of clients per page
    pub async fn get_paginated(
        &self,
        scope: ClientScope,
        filter: ClientFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Client>, AppError> {
        let mut query = entity::prelude::Client::find();

        query = match scope {
            ClientScope::All => query,
            ClientScope::Only(id) => query.filter(entity::client::Column::Id.eq(id)),
            ClientScope::Nothing => return Ok(Page::new(Vec::new(), 0, page, per_page)),
        };

        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                query = query.filter(entity::client::Column::Name.contains(search));
            }
        }
        if let Some(manager_id) = filter.account_manager_id {
            query = query.filter(entity::client::Column::AccountManagerId.eq(manager_id));
        }

        let paginator = query
            .order_by_asc(entity::client::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let clients = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Client::from_entity)
            .collect();

        Ok(Page::new(clients, total, page, per_page))
    }

    /// Replaces a client's fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - The updated client
    /// - `Ok(None)` - No client with that ID
    /// - `Err(AppError::Conflict)` - Another client already has the new name
    pub async fn update(
        &self,
        id: i32,
        param: ClientFieldsParam,
    ) -> Result<Option<Client>, AppError> {
        let Some(client) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let name = param.name.clone();
        let mut active_model: entity::client::ActiveModel = client.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.email = ActiveValue::Set(param.email);
        active_model.phone = ActiveValue::Set(param.phone);
        active_model.website = ActiveValue::Set(param.website);
        active_model.notes = ActiveValue::Set(param.notes);
        active_model.account_manager_id = ActiveValue::Set(param.account_manager_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model
            .update(self.db)
            .await
            .map_err(|e| conflict_on_unique(e, || duplicate_name(&name)))?;

        Ok(Some(Client::from_entity(entity)))
    }

    /// Deletes a client. Issues, comments, files, notifications and domains cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The client was deleted
    /// - `Ok(false)` - No client with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts a client's issues as `(open, closed)`.
    ///
    /// RESOLVED and CLOSED issues count as closed, everything else as open.
    pub async fn count_issues(&self, client_id: i32) -> Result<(u64, u64), AppError> {
        let done = IssueStatus::done_values();

        let closed = entity::prelude::Issue::find()
            .filter(entity::issue::Column::ClientId.eq(client_id))
            .filter(entity::issue::Column::Status.is_in(done.clone()))
            .count(self.db)
            .await?;

        let open = entity::prelude::Issue::find()
            .filter(entity::issue::Column::ClientId.eq(client_id))
            .filter(entity::issue::Column::Status.is_not_in(done))
            .count(self.db)
            .await?;

        Ok((open, closed))
    }

    /// Gets client names for the given IDs.
    pub async fn get_names_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<std::collections::HashMap<i32, String>, AppError> {
        if ids.is_empty() {
            return Ok(Default::default());
        }

        let clients = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(clients.into_iter().map(|c| (c.id, c.name)).collect())
    }
}

pub(crate) fn duplicate_name(name: &str) -> String {
    format!("A client named '{}' already exists", name)
}
