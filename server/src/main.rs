//! Shiptrack Server binary.

use shiptrack_server::config::{Config, StoreBackend};
use shiptrack_server::db::{self, PgShipmentStore};
use shiptrack_server::store::{MemoryShipmentStore, ShipmentStore};
use shiptrack_server::{app, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiptrack_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting {} on {}:{}", config.server_name, config.host, config.port);

    let store = connect_store(&config.store_backend).await?;
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(store, config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Establish the configured store once; it is shared by every request.
async fn connect_store(
    backend: &StoreBackend,
) -> Result<Arc<dyn ShipmentStore>, Box<dyn std::error::Error>> {
    match backend {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = db::create_pool(database_url, *max_connections).await?;

            tracing::info!("Running database migrations...");
            db::run_migrations(&pool).await?;

            Ok(Arc::new(PgShipmentStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; shipments will not survive a restart");
            Ok(MemoryShipmentStore::new_shared())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
