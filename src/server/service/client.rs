//! Client organization service.
//!
//! Validates client fields, enforces name uniqueness and account manager ownership,
//! and enriches clients with their account manager's name for display.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        client::{CreateClientDto, UpdateClientDto},
        user::Role,
    },
    server::{
        data::{
            client::{self, ClientRepository},
            user::UserRepository,
        },
        error::AppError,
        middleware::policy,
        model::{
            client::{Client, ClientDetails, ClientFieldsParam, ClientFilter, ClientWithManager},
            page::Page,
            user::User,
        },
        util::validate,
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a client.
    ///
    /// Account managers always become the manager of clients they create. Admins may
    /// name any ACCOUNT_MANAGER or ADMIN user, or leave the client unassigned.
    ///
    /// # Returns
    /// - `Ok(ClientWithManager)` - The created client
    /// - `Err(AppError::BadRequest)` - Invalid field or account manager
    /// - `Err(AppError::Conflict)` - A client with that name already exists
    pub async fn create(
        &self,
        actor: &User,
        dto: CreateClientDto,
    ) -> Result<ClientWithManager, AppError> {
        let mut param = Self::validate(ClientFieldsParam::from(dto))?;

        if policy::is_admin(actor) {
            self.check_account_manager(param.account_manager_id).await?;
        } else {
            param.account_manager_id = Some(actor.id);
        }

        let repo = ClientRepository::new(self.db);
        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(client::duplicate_name(&param.name)));
        }

        let client = repo.create(param).await?;

        tracing::info!("User {} created client {} ({})", actor.id, client.name, client.id);

        self.with_manager(client).await
    }

    /// Gets the clients `actor` may see, ordered by name.
    pub async fn get_paginated(
        &self,
        actor: &User,
        filter: ClientFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ClientWithManager>, AppError> {
        let clients = ClientRepository::new(self.db)
            .get_paginated(policy::client_scope(actor), filter, page, per_page)
            .await?;

        let manager_ids: Vec<i32> = clients
            .items
            .iter()
            .filter_map(|c| c.account_manager_id)
            .collect();
        let names = UserRepository::new(self.db)
            .get_names_by_ids(&manager_ids)
            .await?;

        Ok(clients.map(|client| ClientWithManager {
            account_manager_name: client
                .account_manager_id
                .and_then(|id| names.get(&id).cloned()),
            client,
        }))
    }

    /// Gets a client with its open and closed issue counts.
    ///
    /// # Returns
    /// - `Ok(Some(ClientDetails))` - The client
    /// - `Ok(None)` - No client with that ID
    pub async fn get_details(&self, id: i32) -> Result<Option<ClientDetails>, AppError> {
        let repo = ClientRepository::new(self.db);

        let Some(client) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let (open_issue_count, closed_issue_count) = repo.count_issues(id).await?;

        Ok(Some(ClientDetails {
            client: self.with_manager(client).await?,
            open_issue_count,
            closed_issue_count,
        }))
    }

    /// Replaces a client's fields.
    ///
    /// The account manager only changes when an admin makes the update; for anyone
    /// else the current manager is kept regardless of the submitted value.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        dto: UpdateClientDto,
    ) -> Result<ClientWithManager, AppError> {
        let repo = ClientRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        };

        let mut param = Self::validate(ClientFieldsParam::from(dto))?;

        if policy::is_admin(actor) {
            if param.account_manager_id != existing.account_manager_id {
                self.check_account_manager(param.account_manager_id).await?;
            }
        } else {
            param.account_manager_id = existing.account_manager_id;
        }

        if let Some(other) = repo.find_by_name(&param.name).await? {
            if other.id != id {
                return Err(AppError::Conflict(client::duplicate_name(&param.name)));
            }
        }

        let client = repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))?;

        self.with_manager(client).await
    }

    /// Deletes a client and unlinks its CLIENT users.
    ///
    /// Issues and domain names of the client are removed by cascade. Both steps run in
    /// one transaction, so a failed delete leaves the user links in place.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let unlinked = UserRepository::new(&txn).unlink_client(id).await?;

        if !ClientRepository::new(&txn).delete(id).await? {
            txn.rollback().await?;
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }

        txn.commit().await?;

        tracing::info!(
            "User {} deleted client {} and unlinked {} users",
            actor.id,
            id,
            unlinked
        );

        Ok(())
    }

    fn validate(param: ClientFieldsParam) -> Result<ClientFieldsParam, AppError> {
        Ok(ClientFieldsParam {
            name: validate::text("name", &param.name, 1, 100)?,
            email: validate::optional_email("email", param.email)?,
            phone: validate::optional_text("phone", param.phone, 50)?,
            website: validate::optional_http_url("website", param.website)?,
            notes: validate::optional_text("notes", param.notes, 5_000)?,
            account_manager_id: param.account_manager_id,
        })
    }

    /// Ensures `account_manager_id`, when set, names an ACCOUNT_MANAGER or ADMIN user.
    async fn check_account_manager(&self, account_manager_id: Option<i32>) -> Result<(), AppError> {
        let Some(id) = account_manager_id else {
            return Ok(());
        };

        match UserRepository::new(self.db).find_by_id(id).await? {
            Some(user) if matches!(user.role, Role::AccountManager | Role::Admin) => Ok(()),
            Some(_) => Err(AppError::BadRequest(format!(
                "User {} is not an account manager",
                id
            ))),
            None => Err(AppError::BadRequest(format!("User {} does not exist", id))),
        }
    }

    async fn with_manager(&self, client: Client) -> Result<ClientWithManager, AppError> {
        let account_manager_name = match client.account_manager_id {
            Some(id) => UserRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(|user| user.name),
            None => None,
        };

        Ok(ClientWithManager {
            client,
            account_manager_name,
        })
    }
}
