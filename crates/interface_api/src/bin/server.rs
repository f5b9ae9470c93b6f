//! FRA Claims - API Server Binary
//!
//! This binary starts the HTTP API server for the forest rights claims list.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (bundled sample register)
//! cargo run --bin fra-claims-api
//!
//! # Run against a dataset on disk with JSON logs
//! API_DATASET_PATH=./claims.json API_LOG_FORMAT=json cargo run --bin fra-claims-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FORMAT` - `text` or `json` (default: text)
//! * `API_PAGE_SIZE` - Default rows per page (default: 25)
//! * `API_DATASET_PATH` - JSON claim dataset (default: bundled sample register)
//! * `API_MAX_SESSIONS` - Live query session limit (default: 1024)

use std::net::SocketAddr;

use anyhow::Context;
use domain_claims::{ClaimCatalog, ClaimSource};
use infra_dataset::{BundledDataset, JsonFileSource};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::create_router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, loads the claim catalog and
/// starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The claim dataset cannot be read or fails validation
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Invalid API configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting FRA Claims API Server"
    );

    let catalog = load_catalog(&config)?;

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    let app = create_router(catalog, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads the claim catalog from the configured dataset.
fn load_catalog(config: &ApiConfig) -> anyhow::Result<ClaimCatalog> {
    let source: Box<dyn ClaimSource> = match &config.dataset_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BundledDataset),
    };

    ClaimCatalog::load(source.as_ref())
        .with_context(|| format!("Failed to load claims from {}", source.name()))
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
