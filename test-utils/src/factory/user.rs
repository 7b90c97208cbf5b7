//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).name("Root").role("ADMIN").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    provider_id: String,
    email: String,
    name: String,
    role: String,
    client_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - provider_id: `"provider|{id}"`
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"USER"`
    /// - client_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            provider_id: format!("provider|{}", id),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            role: "USER".to_string(),
            client_id: None,
        }
    }

    pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored role string (`ADMIN`, `ACCOUNT_MANAGER`, `DEVELOPER`, `CLIENT`, `USER`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn client_id(mut self, client_id: Option<i32>) -> Self {
        self.client_id = client_id;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            provider_id: ActiveValue::Set(self.provider_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            client_id: ActiveValue::Set(self.client_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values and the `USER` role.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
