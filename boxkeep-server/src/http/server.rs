//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use boxkeep_core::models::DEFAULT_PER_PAGE;
use boxkeep_core::InventoryStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;

/// Default listening port
const DEFAULT_PORT: u16 = 8088;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8088)
    pub bind_addr: SocketAddr,

    /// Boxes per page on the listing endpoint (default: 5)
    pub page_size: u32,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// - `PORT`: listening port on all interfaces (default: 8088)
    /// - `BOXKEEP_PAGE_SIZE`: boxes per page (default: 5)
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let page_size = std::env::var("BOXKEEP_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            page_size,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            page_size: DEFAULT_PER_PAGE,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: InventoryStore,
    pub page_size: u32,
}

impl AppState {
    pub fn new(store: InventoryStore, page_size: u32) -> Self {
        Self { store, page_size }
    }
}

/// Build the router with every route and middleware attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::boxes::router())
        .merge(routes::items::router())
        .merge(routes::api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until Ctrl+C or SIGTERM, then close the store.
///
/// # Example
///
/// ```ignore
/// let store = InventoryStore::open(&StoreConfig::from_env()).await?;
/// run_server(store, ServerConfig::from_env()).await?;
/// ```
pub async fn run_server(store: InventoryStore, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store.clone(), config.page_size));

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
