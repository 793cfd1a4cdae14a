//! SWAPI Cache - A read-through caching proxy for the Star Wars API
//!
//! Serves films, characters and starships from an in-memory TTL cache,
//! fetching from the upstream API on a miss.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swapi_cache::api::create_router;
use swapi_cache::cache::SharedCache;
use swapi_cache::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the caching proxy.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache, upstream client and orchestrator
/// 4. Start the background expiry sweep if enabled
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. On SIGINT/SIGTERM stop the sweep and clear the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swapi_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SWAPI caching proxy");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, port={}, upstream={}, timeout={}s, attempts={}",
        config.default_ttl,
        config.server_port,
        config.swapi_base_url,
        config.request_timeout,
        config.max_attempts
    );

    let state = AppState::from_config(&config).context("Failed to build upstream client")?;
    let cache = state.orchestrator.cache().clone();

    let cleanup_handle = if config.cleanup_interval > 0 {
        Some(spawn_cleanup_task(cache.clone(), config.cleanup_interval))
    } else {
        info!("Background expiry sweep disabled, relying on lazy expiry");
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle, cache))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then tears down the cache.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>, cache: SharedCache) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
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
        warn!("Expiry sweep task aborted");
    }

    cache.lock().await.clear();
    info!("Cache service closed");
}
