//! # Dashboard Commands
//!
//! The landing screen: headline counts, revenue, component stock and a
//! short preview of products and sales, plus the header clock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stockroom                                   18-10-2026   14:05:09      │
//! │                                                                         │
//! │  Employees 2   Suppliers 2   Products 2   Sales 1   Revenue ₹138000.00  │
//! │                                                                         │
//! │  Components: microchips 150 · circuit boards 75 · ...   (total 375)     │
//! │                                                                         │
//! │  Products (first 3)            Sales (first 3)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every figure is recomputed from the inventory on each request.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use stockroom_store::DashboardSummary;
use tracing::debug;

use crate::state::{AppState, ConfigState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/clock", get(get_clock))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub store_name: String,
    /// Revenue formatted with the configured currency symbol.
    pub total_revenue_display: String,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

/// Header clock: `dd-MM-yyyy` and `HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockDto {
    pub date: String,
    pub time: String,
}

impl From<NaiveDateTime> for ClockDto {
    fn from(now: NaiveDateTime) -> Self {
        ClockDto {
            date: now.format("%d-%m-%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
        }
    }
}

pub async fn get_dashboard(
    State(inventory): State<InventoryState>,
    State(config): State<Arc<ConfigState>>,
) -> Json<DashboardDto> {
    debug!("get_dashboard command");
    let summary = inventory.with_inventory(|inv| inv.dashboard());

    Json(DashboardDto {
        store_name: config.store_name.clone(),
        total_revenue_display: config.format_money(summary.total_revenue),
        summary,
    })
}

pub async fn get_clock() -> Json<ClockDto> {
    Json(ClockDto::from(Local::now().naive_local()))
}
