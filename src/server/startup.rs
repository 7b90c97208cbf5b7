use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin::code::AdminCodeService,
    state::OAuth2Client,
};

const DEFAULT_LOG_FILTER: &str = "issue_tracker=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to info-level logs for this crate and
/// the HTTP trace layer.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite file as the application data. The session table is
/// created on first run. Sessions expire after 7 days of inactivity and the cookie is
/// only marked secure when the app is served over https.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for identity provider requests.
///
/// Redirects are disabled so a misconfigured endpoint cannot bounce the access token
/// to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, e: oauth2::url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.oauth_auth_url.clone()).map_err(|e| invalid("OAUTH_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.oauth_token_url.clone())
                .map_err(|e| invalid("OAUTH_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.oauth_redirect_url.clone())
                .map_err(|e| invalid("OAUTH_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Issues an admin bootstrap code when no admin exists yet.
///
/// The login link is written to the log. Whoever follows it within the code's lifetime
/// is promoted to `ADMIN` on their first login.
///
/// # Returns
/// - `Ok(Some(code))` - No admin existed and a code was generated
/// - `Ok(None)` - An admin already exists
/// - `Err(AppError)` - Database error while checking for admins
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<Option<String>, AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(None);
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin user found. Log in within 60 seconds to become admin: {}/api/auth/login?admin_code={}",
        config.app_url,
        code
    );

    Ok(Some(code))
}
