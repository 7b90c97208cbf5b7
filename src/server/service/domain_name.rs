//! Domain names registered for clients.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::domain_name::{self, DomainNameRepository},
    error::AppError,
    model::domain_name::{DomainName, DomainNameFieldsParam},
    util::validate,
};

pub struct DomainNameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainNameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a client's domains ordered by name.
    pub async fn get_by_client(&self, client_id: i32) -> Result<Vec<DomainName>, AppError> {
        DomainNameRepository::new(self.db)
            .get_by_client(client_id)
            .await
    }

    /// Registers a domain for a client.
    ///
    /// # Returns
    /// - `Ok(DomainName)` - The stored domain with its normalized name
    /// - `Err(AppError::BadRequest)` - Invalid hostname or registrar
    /// - `Err(AppError::Conflict)` - The domain is already registered
    pub async fn create(
        &self,
        client_id: i32,
        param: DomainNameFieldsParam,
    ) -> Result<DomainName, AppError> {
        let param = self.validate(None, param).await?;

        DomainNameRepository::new(self.db)
            .create(client_id, param)
            .await
    }

    pub async fn update(&self, id: i32, param: DomainNameFieldsParam) -> Result<DomainName, AppError> {
        let param = self.validate(Some(id), param).await?;

        DomainNameRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DomainNameRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Normalizes the fields and rejects names taken by another domain.
    async fn validate(
        &self,
        id: Option<i32>,
        param: DomainNameFieldsParam,
    ) -> Result<DomainNameFieldsParam, AppError> {
        let name = validate::domain_name(&param.name)?;

        if let Some(existing) = DomainNameRepository::new(self.db).find_by_name(&name).await? {
            if Some(existing.id) != id {
                return Err(AppError::Conflict(domain_name::duplicate_name(&name)));
            }
        }

        Ok(DomainNameFieldsParam {
            name,
            registrar: validate::optional_text("registrar", param.registrar, 100)?,
            expires_at: param.expires_at,
        })
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Domain name {} not found", id))
}
