//! LUCT Reporting - Application Entry Point
//!
//! This is the main entry point for the reporting API server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use luct_reporting::{
    auth::JwtAuthProvider,
    config::{Config, LogFormat},
    db, handlers,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }

    tracing::info!("Starting LUCT reporting server...");

    // Initialize database connection pool
    let db_pool = db::create_pool(&config.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    let auth = Arc::new(JwtAuthProvider::from_config(&config.jwt));

    // Create application state
    let state = AppState::new(db_pool, auth, config);

    let addr = SocketAddr::new(
        state.config().server.host.parse()?,
        state.config().server.port,
    );
    let app = handlers::app(state);

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
