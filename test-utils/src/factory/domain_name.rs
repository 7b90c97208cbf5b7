//! Domain name factory for creating test domain entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a unique `site{id}.example.com` domain for the client.
pub async fn create_domain_name(
    db: &DatabaseConnection,
    client_id: i32,
) -> Result<entity::domain_name::Model, DbErr> {
    entity::domain_name::ActiveModel {
        client_id: ActiveValue::Set(client_id),
        name: ActiveValue::Set(format!("site{}.example.com", next_id())),
        registrar: ActiveValue::Set(None),
        expires_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
