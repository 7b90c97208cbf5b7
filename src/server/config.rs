use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_DUE_SOON_HOURS: i64 = 24;
/// One year.
const MAX_DUE_SOON_HOURS: i64 = 366 * 24;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,

    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// How far ahead of an issue's due date the due-soon notification fires.
    pub due_soon_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            app_url: require_env("APP_URL")?.trim_end_matches('/').to_string(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            oauth_client_id: require_env("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require_env("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: require_env("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: require_env("OAUTH_AUTH_URL")?,
            oauth_token_url: require_env("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: require_env("OAUTH_USERINFO_URL")?,
            due_soon_hours: parse_due_soon_hours(std::env::var("DUE_SOON_HOURS").ok())?,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_due_soon_hours(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_DUE_SOON_HOURS);
    };

    match value.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_DUE_SOON_HOURS).contains(&hours) => Ok(hours),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "DUE_SOON_HOURS".to_string(),
            reason: format!(
                "expected a number of hours between 1 and {}, got '{}'",
                MAX_DUE_SOON_HOURS, value
            ),
        }),
    }
}
