//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds the database pool, the HTTP and OAuth2 clients
//! used for login, the admin bootstrap code service, and the URLs the auth flow needs.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::admin::code::AdminCodeService;

/// OAuth2 client with the authorization and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the database connection and reqwest client are
/// pools behind an `Arc`, and `AdminCodeService` shares its code through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client used to call the identity provider's userinfo endpoint.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the login flow.
    pub oauth_client: OAuth2Client,

    /// One-time admin code issued at startup when no admin exists.
    pub admin_code_service: AdminCodeService,

    /// Userinfo endpoint queried after the code exchange.
    pub userinfo_url: String,

    /// Public base URL of the application, used for post-login redirects.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for identity provider requests
    /// - `oauth_client` - Configured OAuth2 client
    /// - `admin_code_service` - Service for managing the admin bootstrap code
    /// - `userinfo_url` - Identity provider userinfo endpoint
    /// - `app_url` - Application base URL
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        admin_code_service: AdminCodeService,
        userinfo_url: String,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_code_service,
            userinfo_url,
            app_url,
        }
    }
}
