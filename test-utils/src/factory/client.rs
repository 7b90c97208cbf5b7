//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: Option<String>,
    website: Option<String>,
    account_manager_id: Option<i32>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"`
    /// - email, website: `None`
    /// - account_manager_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Client {}", next_id()),
            email: None,
            website: None,
            account_manager_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.website = website;
        self
    }

    pub fn account_manager_id(mut self, account_manager_id: Option<i32>) -> Self {
        self.account_manager_id = account_manager_id;
        self
    }

    /// Builds and inserts the client entity into the database.
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now();
        entity::client::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            website: ActiveValue::Set(self.website),
            notes: ActiveValue::Set(None),
            account_manager_id: ActiveValue::Set(self.account_manager_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client managed by the given account manager.
pub async fn create_client(
    db: &DatabaseConnection,
    account_manager_id: Option<i32>,
) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db)
        .account_manager_id(account_manager_id)
        .build()
        .await
}
