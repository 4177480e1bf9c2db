//! Device API server
//!
//! Loads configuration, opens the SQLite store, serves HTTP until ctrl-c,
//! then closes the store.

use std::sync::Arc;
use std::time::Duration;

use device_api::application::DeviceRepositoryPort;
use device_api::config::{load_config, print_config};
use device_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use device_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteDeviceRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: environment > config file > defaults
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let log_filter = format!(
        "{},device_api={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Device API");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let device_repo: Arc<dyn DeviceRepositoryPort> =
        Arc::new(SqliteDeviceRepository::new(pool));

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_api_version(config.server.api_version.clone())
        .with_request_timeout(Duration::from_secs(config.server.request_timeout_secs));
    let server = HttpServer::new(server_config, AppState::new(device_repo.clone()));

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    device_repo.close().await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
