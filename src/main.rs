//! Server: loads config from the environment, ensures tables exist, serves the API.

use pizza_restaurants::{app, connect, ensure_tables, init_tracing, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    let state = AppState::new(pool);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(database = %config.database_url, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::warn!("received Ctrl+C, shutting down");
}
