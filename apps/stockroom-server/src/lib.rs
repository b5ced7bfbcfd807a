//! # Stockroom Server Library
//!
//! JSON command layer for the Stockroom screens. Configures and runs the
//! HTTP server.
//!
//! ## Module Organization
//! ```text
//! stockroom_server/
//! ├── lib.rs            ◄─── You are here (startup, router, shutdown)
//! ├── state/
//! │   ├── mod.rs        ◄─── AppState + FromRef
//! │   ├── inventory.rs  ◄─── Inventory behind a mutex
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Route table and shared helpers
//! │   ├── employee.rs   ◄─── Employee search/CRUD
//! │   ├── supplier.rs   ◄─── Supplier CRUD
//! │   ├── category.rs   ◄─── Category add/delete
//! │   ├── product.rs    ◄─── Product filter/CRUD
//! │   ├── sale.rs       ◄─── Record sale
//! │   ├── component.rs  ◄─── Component parts and counts
//! │   └── dashboard.rs  ◄─── Summary and clock
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use stockroom_store::{Inventory, SeedData};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;
use crate::state::{AppState, ConfigState, InventoryState};

/// Runs the server until Ctrl-C or SIGTERM.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Server Startup                                    │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, debug for stockroom crates; RUST_LOG overrides     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → stockroom.toml → STOCKROOM_* env                       │
/// │                                                                         │
/// │  3. Build Inventory ──────────────────────────────────────────────────► │
/// │     • seed_path set: load that JSON                                     │
/// │     • otherwise: built-in sample shop                                   │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • bind, route, run until shutdown signal                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ServerError> {
    init_tracing();

    info!("Starting Stockroom server");

    let config = ConfigState::load(None)?;
    let inventory = match &config.seed_path {
        Some(path) => Inventory::from_seed(SeedData::from_json_file(path)?),
        None => Inventory::seeded(),
    };

    let addr = config.socket_addr()?;
    let state = AppState::new(InventoryState::new(inventory), config);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(commands::routes())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=stockroom_server=trace` - Trace the command layer only
/// - Default: info, debug for the stockroom crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,stockroom_core=debug,stockroom_store=debug,stockroom_server=debug")
    });

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
