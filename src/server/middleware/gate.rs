//! Coarse request gate for data routes.
//!
//! Runs before every handler on the protected router: requests without a logged-in
//! user are rejected with 401 and users still holding the `USER` role with 403 until
//! an administrator approves them. Fine-grained checks stay with `AuthGuard`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
        state::AppState,
    },
};

pub async fn require_approved_user(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_approved(&state.db, &session).await?;

    Ok(next.run(request).await)
}

/// Resolves the session user and rejects unapproved accounts.
pub async fn check_approved(db: &DatabaseConnection, session: &Session) -> Result<User, AppError> {
    let Some(user_id) = AuthSession::new(session).get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    if user.role == Role::User {
        return Err(AuthError::PendingApproval(user.id).into());
    }

    Ok(user)
}
