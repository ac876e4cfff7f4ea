//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// Builds the router (including the CORS layer), binds the listener, and
/// serves until a shutdown signal is received.
///
/// # Arguments
///
/// * `config` - The application configuration
///
/// # Returns
///
/// Returns `Ok(())` if the server shuts down gracefully, or an `AppError` if
/// startup fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The CORS configuration contains an origin that is not a valid header value
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config) -> AppResult<()> {
    info!("Starting bdi-backend server...");

    let app = routes::create_router(&config.cors)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!(
        "Allowed CORS origins: {}",
        config.cors.allowed_origins.join(", ")
    );

    // Set up graceful shutdown
    let shutdown_signal = create_shutdown_signal();

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails. Signal handler failures are
/// unrecoverable system-level errors that make graceful shutdown impossible.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
