//! # State Module
//!
//! Shared state for the command handlers.
//!
//! Handlers extract only the state they need; `AppState` is the router's
//! state and hands out the parts through `FromRef`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Router::with_state(AppState)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │  ┌─────────────────────────┐   ┌─────────────────────────┐             │
//! │  │   InventoryState        │   │   Arc<ConfigState>      │             │
//! │  │                         │   │                         │             │
//! │  │  Arc<Mutex<Inventory>>  │   │  bind_addr              │             │
//! │  │                         │   │  deduct_stock_on_sale   │             │
//! │  └─────────────────────────┘   └─────────────────────────┘             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • InventoryState: one lock per command                                │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod inventory;

use std::sync::Arc;

use axum::extract::FromRef;

pub use config::{ConfigError, ConfigState, CONFIG_FILE_NAME};
pub use inventory::InventoryState;

/// Router state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub inventory: InventoryState,
    pub config: Arc<ConfigState>,
}

impl AppState {
    pub fn new(inventory: InventoryState, config: ConfigState) -> Self {
        AppState {
            inventory,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for InventoryState {
    fn from_ref(state: &AppState) -> Self {
        state.inventory.clone()
    }
}

impl FromRef<AppState> for Arc<ConfigState> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
