//! Photo Gateway - A caching HTTP gateway for a remote photo catalog
//!
//! Serves `/photos` and `/photos/:id` from cache, falling back to the
//! upstream catalog on a miss.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photo_gateway::api::{create_router, AppState};
use photo_gateway::cache::{KeyValueStore, MemoryStore, RedisStore};
use photo_gateway::config::{CacheBackend, Config};
use photo_gateway::{spawn_cleanup_task, PhotoClient};

/// Main entry point for the photo gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache store and connect it (best effort)
/// 4. Create the upstream client and Axum router
/// 5. Serve until SIGINT/SIGTERM, then close the store
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting photo gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, upstream={}, port={}",
        config.cache_backend, config.upstream_base_url, config.server_port
    );

    let (store, cleanup_handle) = build_store(&config).await?;

    let upstream = PhotoClient::from_config(&config).context("creating upstream client")?;
    let app = create_router(AppState::new(store.clone(), upstream));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("serving HTTP")?;

    if let Err(e) = store.close().await {
        warn!("Error closing cache store: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Creates the configured store.
///
/// A Redis connection failure is logged and startup continues; requests
/// retry the connection and fail while Redis stays unreachable.
async fn build_store(
    config: &Config,
) -> anyhow::Result<(Arc<dyn KeyValueStore>, Option<JoinHandle<()>>)> {
    match config.cache_backend {
        CacheBackend::Redis => {
            let store = RedisStore::open(&config.redis_url).context("opening Redis client")?;
            if let Err(e) = store.connect().await {
                error!("Error connecting to Redis: {}", e);
            }
            Ok((Arc::new(store), None))
        }
        CacheBackend::Memory => {
            let store = MemoryStore::new();
            let handle = spawn_cleanup_task(store.table(), config.cleanup_interval);
            info!("In-process cache store initialized");
            Ok((Arc::new(store), Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
