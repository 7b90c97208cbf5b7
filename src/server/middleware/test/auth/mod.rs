use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Creates a user with `role` and logs them into the session.
async fn login(
    db: &DatabaseConnection,
    session: &Session,
    role: &str,
    client_id: Option<i32>,
) -> Result<entity::user::Model, AppError> {
    let user = factory::user::UserFactory::new(db)
        .role(role)
        .client_id(client_id)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    Ok(user)
}

fn is_access_denied(result: &Result<User, AppError>) -> bool {
    matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _))))
}

fn is_not_found(result: &Result<User, AppError>) -> bool {
    matches!(result, Err(AppError::NotFound(_)))
}
