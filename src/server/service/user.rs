//! User service for business logic.
//!
//! Provides the `UserService` for listing users and the administrative changes made to
//! them: approving or changing roles and linking CLIENT users to their organization.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{client::ClientRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::policy,
        model::{page::Page, user::User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets users ordered by name, optionally restricted to one role.
    pub async fn get_paginated(
        &self,
        role: Option<Role>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<User>, AppError> {
        UserRepository::new(self.db)
            .get_all_paginated(role, page, per_page)
            .await
    }

    /// Users an issue may be assigned to.
    pub async fn get_assignable(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_staff().await
    }

    /// Changes a user's role.
    ///
    /// Approving a pending account is done by moving it off `Role::User`. Users that
    /// leave the CLIENT role lose their client link in the same transaction.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - An admin tried to change their own role
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update_role(&self, actor: &User, id: i32, role: Role) -> Result<User, AppError> {
        if actor.id == id && role != actor.role {
            return Err(AppError::BadRequest(
                "You cannot change your own role".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.update_role(id, role).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };

        let user = if role != Role::Client && user.client_id.is_some() {
            user_repo.update_client(id, None).await?.unwrap_or(user)
        } else {
            user
        };

        txn.commit().await?;

        tracing::info!("User {} changed role to {}", id, role.as_str());

        Ok(user)
    }

    /// Links a CLIENT user to a client, or unlinks them with `None`.
    ///
    /// Admins may link to any client. Account managers may link users to clients they
    /// manage and unlink users from those clients.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - User or client not found
    /// - `Err(AppError::BadRequest)` - Linking a user who is not a CLIENT
    /// - `Err(AuthError::AccessDenied)` - Actor does not manage the affected client
    pub async fn update_client(
        &self,
        actor: &User,
        id: i32,
        client_id: Option<i32>,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let client_repo = ClientRepository::new(self.db);

        let Some(target) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };

        let mut affected: Vec<i32> = client_id.into_iter().chain(target.client_id).collect();
        affected.dedup();

        if affected.is_empty() && !policy::is_admin(actor) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only admins can change client links".to_string(),
            )
            .into());
        }

        // The actor must manage both the old and the new client.
        for affected_id in affected {
            let Some(client) = client_repo.find_by_id(affected_id).await? else {
                return Err(AppError::NotFound(format!("Client {} not found", affected_id)));
            };
            if !policy::can_manage_client(actor, &client) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "You do not manage this client".to_string(),
                )
                .into());
            }
        }

        if client_id.is_some() && target.role != Role::Client {
            return Err(AppError::BadRequest(
                "Only users with the CLIENT role can be linked to a client".to_string(),
            ));
        }

        user_repo
            .update_client(id, client_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
