// edlp-core/src/infrastructure/http/mod.rs
//
// REST surface consumed by the submission form and the records page.

pub mod handlers;
pub mod router;

pub use router::{AppState, build_router};

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::EdlpError;
use crate::infrastructure::adapters::open_store;
use crate::infrastructure::config::AppConfig;

/// Opens the configured store and serves the API until Ctrl-C.
pub async fn serve(config: &AppConfig) -> Result<(), EdlpError> {
    let store = open_store(config)?;
    info!(backend = store.backend_name(), "Store opened");

    let app = build_router(AppState::new(store, &config.export_prefix), config.cors);
    let listener = TcpListener::bind(config.bind.as_str()).await?;
    info!(addr = %config.bind, "🚀 eDLP policy API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
