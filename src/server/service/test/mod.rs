use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::user::User};
use test_utils::{builder::TestBuilder, factory};


/// Creates a user with `role` and returns it as a domain model.
async fn user_with_role(
    db: &DatabaseConnection,
    role: &str,
    client_id: Option<i32>,
) -> Result<User, AppError> {
    let entity = factory::user::UserFactory::new(db)
        .role(role)
        .client_id(client_id)
        .build()
        .await?;

    User::from_entity(entity)
}
