//! Domain name data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::conflict_on_unique,
    error::AppError,
    model::domain_name::{DomainName, DomainNameFieldsParam},
};

pub struct DomainNameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainNameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a domain for a client. `param.name` must already be normalized.
    ///
    /// A name taken by any client fails with `AppError::Conflict`.
    pub async fn create(
        &self,
        client_id: i32,
        param: DomainNameFieldsParam,
    ) -> Result<DomainName, AppError> {
        let name = param.name.clone();
        let entity = entity::domain_name::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            name: ActiveValue::Set(param.name),
            registrar: ActiveValue::Set(param.registrar),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| conflict_on_unique(e, || duplicate_name(&name)))?;

        Ok(DomainName::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DomainName>, AppError> {
        let entity = entity::prelude::DomainName::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DomainName::from_entity))
    }

    /// Finds a domain by its normalized name across all clients.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<DomainName>, AppError> {
        let entity = entity::prelude::DomainName::find()
            .filter(entity::domain_name::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(DomainName::from_entity))
    }

    /// Gets a client's domains ordered by name.
    pub async fn get_by_client(&self, client_id: i32) -> Result<Vec<DomainName>, AppError> {
        let domains = entity::prelude::DomainName::find()
            .filter(entity::domain_name::Column::ClientId.eq(client_id))
            .order_by_asc(entity::domain_name::Column::Name)
            .all(self.db)
            .await?;

        Ok(domains.into_iter().map(DomainName::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: DomainNameFieldsParam,
    ) -> Result<Option<DomainName>, AppError> {
        let Some(domain) = entity::prelude::DomainName::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let name = param.name.clone();
        let mut active_model: entity::domain_name::ActiveModel = domain.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.registrar = ActiveValue::Set(param.registrar);
        active_model.expires_at = ActiveValue::Set(param.expires_at);
        let entity = active_model
            .update(self.db)
            .await
            .map_err(|e| conflict_on_unique(e, || duplicate_name(&name)))?;

        Ok(Some(DomainName::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::DomainName::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
