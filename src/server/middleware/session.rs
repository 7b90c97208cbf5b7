//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys for one
//! concern:
//! - `AuthSession` - the logged-in user's ID
//! - `CsrfSession` - CSRF state for the OAuth flow
//! - `OAuthFlowSession` - flags carried across the provider redirect (admin promotion)

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session after a successful login.
    ///
    /// The session ID is cycled first so a pre-login session ID cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all session data, logging the user out.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF state management for the OAuth flow.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token, so each token validates at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// Flags that survive the redirect to the identity provider and back.
pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Records that a valid admin code accompanied the login request.
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the admin flag, defaulting to `false`.
    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        let set_admin = self
            .session
            .remove(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false);
        Ok(set_admin)
    }
}
