mod config;
mod error;
mod middleware;
mod routes;
mod server;

use crate::config::Config;
use crate::error::AppResult;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// bdi-backend - API bootstrap for the billion-dollars-idea frontend
#[derive(Parser, Debug)]
#[command(name = "bdi-backend")]
#[command(version = "0.1.0")]
#[command(about = "API bootstrap for the billion-dollars-idea frontend", long_about = None)]
struct Cli {
    /// Host to bind to (overrides SERVER_HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    // Load configuration
    let mut config = Config::from_env()?;

    // Override config with CLI args if provided
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    server::run_server(config).await
}
