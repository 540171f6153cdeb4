//! Daycare Finance - API Server Binary
//!
//! This binary starts the HTTP API server for the daycare finance service.
//!
//! # Usage
//!
//! ```bash
//! # Run with environment variables
//! API_PROVIDER_BASE_URL=https://billing.example.com/v3 \
//! API_PROVIDER_API_KEY=tok_... \
//! cargo run --bin creche-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_PROVIDER_BASE_URL` - Billing provider base URL (required)
//! * `API_PROVIDER_API_KEY` - Billing provider credential (required; the
//!   process refuses to start without it)
//! * `API_EXPENSE_FILE` - Path of the expense JSON file; expenses stay in
//!   memory when unset
//! * `API_FETCH_CONCURRENCY` - Concurrent per-customer payment fetches (default: 5)
//! * `API_PAGE_LIMIT` - Page size for provider listings (default: 100)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_finance::ExpenseStore;
use infra_provider::ProviderClient;
use infra_store::{JsonFileStore, MemoryExpenseStore};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires the provider gateway and
/// expense store, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The provider credential is missing (the server must not start)
/// - The server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("loading configuration from environment")?;

    init_tracing(&config.log_level);

    // Fatal: serving without the provider credential would fail every call
    config
        .ensure_provider_config()
        .context("provider configuration")?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting daycare finance API server"
    );

    let provider = Arc::new(ProviderClient::new(
        config.provider_base_url.clone(),
        config.provider_api_key.clone(),
    ));

    let expenses: Arc<dyn ExpenseStore> = match &config.expense_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "using file-backed expense store");
            Arc::new(JsonFileStore::new(path))
        }
        None => {
            tracing::info!("using in-memory expense store");
            Arc::new(MemoryExpenseStore::new())
        }
    };

    let app = create_router(provider, expenses, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("parsing server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
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
