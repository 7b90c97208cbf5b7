//! OAuth2 login against a generic authorization-code provider.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{UpsertUserParam, User},
        state::OAuth2Client,
    },
};

/// Subset of the OpenID Connect userinfo response the application stores.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Service for the OAuth2 login flow and identity synchronization.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the provider authorization URL.
    ///
    /// Requests the `openid`, `email` and `profile` scopes.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes the login after the provider redirected back.
    ///
    /// Exchanges the authorization code, fetches the userinfo document and upserts the
    /// user. When `set_admin` is true the user is promoted to ADMIN.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::TokenExchange)` - Provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(&self, authorization_code: String, set_admin: bool) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        self.sync_user(user_info, set_admin).await
    }

    /// Creates or refreshes the user described by `user_info`.
    ///
    /// The role is preserved for returning users unless `set_admin` is true. Missing
    /// names fall back to the email address, then to the subject.
    pub async fn sync_user(&self, user_info: UserInfo, set_admin: bool) -> Result<User, AppError> {
        let email = user_info.email.unwrap_or_default();
        let name = user_info
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| {
                if email.is_empty() {
                    user_info.sub.clone()
                } else {
                    email.clone()
                }
            });

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                provider_id: user_info.sub,
                email,
                name,
                role: set_admin.then_some(Role::Admin),
            })
            .await?;

        if set_admin {
            tracing::info!("User {} ({}) has been promoted to admin", user.name, user.id);
        }

        Ok(user)
    }
}
