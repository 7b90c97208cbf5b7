mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::AppError, router, scheduler::due_date,
    service::admin::code::AdminCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and generate login link if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let _scheduler = due_date::start_scheduler(db.clone(), config.due_soon_hours).await?;

    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(&config.app_url).map_err(|e| {
            AppError::InternalError(format!("APP_URL is not a valid origin: {}", e))
        })?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        admin_code_service,
        config.oauth_userinfo_url.clone(),
        config.app_url.clone(),
    );

    let app = router::router(state)
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
