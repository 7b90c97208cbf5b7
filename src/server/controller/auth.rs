use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginParams {
    /// One-time code printed at startup when no admin exists.
    pub admin_code: Option<String>,
}

/// Query parameters of the provider redirect.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token, checked against the session.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Start the login flow.
///
/// Stores a CSRF token in the session and redirects to the identity provider. When
/// `admin_code` matches the current bootstrap code, the user logging in is promoted
/// to ADMIN on callback.
///
/// # Returns
/// - `307 Temporary Redirect` - To the provider's authorization page
/// - `400 Bad Request` - Admin code invalid or expired
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(LoginParams),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 400, description = "Invalid or expired admin code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(code) = params.admin_code {
        if !state.admin_code_service.validate_and_consume(&code).await {
            return Err(AppError::BadRequest(
                "Invalid or expired admin code".to_string(),
            ));
        }
        OAuthFlowSession::new(&session).set_admin_flag(true).await?;
    }

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );
    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish the login flow.
///
/// Validates the CSRF state, exchanges the code, creates or refreshes the user and
/// stores them in the session before redirecting to the application.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Logged in, redirect to the application"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Token exchange or userinfo request failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let stored = CsrfSession::new(&session).take_token().await?;
    if stored.as_deref() != Some(params.state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
    );
    let user = auth_service.callback(params.code, set_admin).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok(Redirect::temporary(&state.app_url))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the application"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::temporary(&state.app_url))
}

/// Get the logged-in user.
///
/// Available to users awaiting approval so the frontend can show their status.
///
/// # Returns
/// - `200 OK` - The current user
/// - `404 Not Found` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let not_logged_in = || AppError::NotFound("Not logged in".to_string());

    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(not_logged_in());
    };

    let user = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(not_logged_in)?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
