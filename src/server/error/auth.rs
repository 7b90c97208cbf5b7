use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request is unauthenticated. Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The user ID stored in the session no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response so the client logs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but not permitted to perform the action.
    ///
    /// Results in a 403 Forbidden response carrying the denial reason.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The user still holds the USER role and has not been approved by an admin.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is pending approval")]
    PendingApproval(i32),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state token in the callback URL does not match the token stored in the
    /// session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The identity provider rejected the authorization code exchange.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with the denial reason
/// - `PendingApproval` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` → 500 Internal Server Error
///
/// All errors are logged at debug level, and token exchange failures at error level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, reason) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
            Self::PendingApproval(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Your account is pending approval".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(msg) => {
                tracing::error!("OAuth token exchange failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
