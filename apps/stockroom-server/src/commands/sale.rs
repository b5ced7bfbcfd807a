//! # Sale Commands
//!
//! Recording a sale snapshots the product's name and price into the sale
//! line. Later edits to the product do not change recorded sales.
//!
//! ## Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/sales { productId: "1", quantity: 2, customer: "Ravi" }      │
//! │       │                                                                 │
//! │       ▼  (inventory lock held from here)                                │
//! │  product exists?  ── no ──► 404 NOT_FOUND                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_sale    ── customer blank / qty 0 ──► 400 VALIDATION_ERROR    │
//! │       │           ── Inactive ───────────────► 422 BUSINESS_LOGIC      │
//! │       │           ── qty > stock ────────────► 422 INSUFFICIENT_STOCK  │
//! │       ▼                                                                 │
//! │  Sale { price: ₹69000.00, total: ₹138000.00, date: today }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  record_sale(sale, config.deduct_stock_on_sale) ──► 201                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use stockroom_core::validation::validate_sale;
use stockroom_core::{CoreError, Sale};
use tracing::{debug, info};

use super::reject;
use crate::error::ApiError;
use crate::state::{AppState, ConfigState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/sales", get(list_sales).post(record_sale))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub customer: String,
}

pub async fn list_sales(State(inventory): State<InventoryState>) -> Json<Vec<Sale>> {
    debug!("list_sales command");
    Json(inventory.with_inventory(|inv| inv.sales().as_slice().to_vec()))
}

pub async fn record_sale(
    State(inventory): State<InventoryState>,
    State(config): State<Arc<ConfigState>>,
    Json(request): Json<RecordSaleRequest>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    debug!(
        product_id = %request.product_id,
        quantity = request.quantity,
        "record_sale command"
    );
    let today = Local::now().date_naive();

    let sale = inventory
        .with_inventory_mut(|inv| {
            let product = inv
                .products()
                .get(&request.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(request.product_id.clone()))?;
            validate_sale(product, request.quantity, &request.customer)?;

            let mut sale = Sale::from_product(
                String::new(),
                product,
                request.quantity,
                request.customer.trim(),
                today,
            );
            sale.id = inv.sales_mut().next_id();
            inv.record_sale(sale.clone(), config.deduct_stock_on_sale);
            Ok::<_, ApiError>(sale)
        })
        .map_err(reject("record_sale"))?;

    info!(
        id = %sale.id,
        product = %sale.product_name,
        quantity = sale.quantity,
        total = %sale.total,
        "Sale recorded"
    );
    Ok((StatusCode::CREATED, Json(sale)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use stockroom_core::validation::MAX_PRICE;

    use crate::commands::test_support::{app, app_with, send};
    use crate::state::ConfigState;

    #[tokio::test]
    async fn test_sale_total_is_price_times_quantity() {
        let (app, inventory) = app();

        let (status, sale) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 2, "customer": "Ravi" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(sale["id"], "1");
        assert_eq!(sale["productName"], "Oppo X3");
        assert_eq!(sale["price"], 6_900_000);
        assert_eq!(sale["total"], 13_800_000);

        // Stock stays put unless deduction is switched on
        assert_eq!(inventory.with_inventory(|inv| inv.products().get("1").unwrap().qty), 45);

        let (_, sales) = send(&app, Method::GET, "/api/sales", None).await;
        assert_eq!(sales.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sale_over_stock_rejected() {
        let (app, inventory) = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 46, "customer": "Ravi" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INSUFFICIENT_STOCK");
        assert!(inventory.with_inventory(|inv| inv.sales().is_empty()));
    }

    #[tokio::test]
    async fn test_inactive_product_rejected() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "2", "quantity": 1, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "BUSINESS_LOGIC");
    }

    #[tokio::test]
    async fn test_sale_requires_customer_and_quantity() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "customer is required");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 0, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_product_not_found() {
        let (app, _) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "42", "quantity": 1, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_deduct_stock_when_configured() {
        let (app, inventory) = app_with(ConfigState {
            deduct_stock_on_sale: true,
            ..Default::default()
        });

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 45, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(inventory.with_inventory(|inv| inv.products().get("1").unwrap().qty), 0);

        // Sold out: no longer sellable and further sales are rejected
        let (_, sellable) = send(&app, Method::GET, "/api/products/sellable", None).await;
        assert!(sellable.as_array().unwrap().is_empty());

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": "1", "quantity": 1, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sale_of_highest_priced_product() {
        let (app, inventory) = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/products",
            Some(json!({
                "category": "Mobile",
                "supplier": "Ajay",
                "name": "Gold Edition",
                "price": 5_000_000_000_000_000_000_i64,
                "qty": 5
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, product) = send(
            &app,
            Method::POST,
            "/api/products",
            Some(json!({
                "category": "Mobile",
                "supplier": "Ajay",
                "name": "Gold Edition",
                "price": MAX_PRICE.minor(),
                "qty": 5
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, sale) = send(
            &app,
            Method::POST,
            "/api/sales",
            Some(json!({ "productId": product["id"], "quantity": 2, "customer": "Ravi" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(sale["total"], MAX_PRICE.minor() * 2);
        assert_eq!(
            inventory.with_inventory(|inv| inv.total_revenue()).minor(),
            MAX_PRICE.minor() * 2
        );
    }
}
