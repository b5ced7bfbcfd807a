//! # Product Commands
//!
//! The product screen and the sale screen's product picker.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Filter                                       │
//! │                                                                         │
//! │  User types "mob"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /api/products?q=mob                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  name contains "mob"  OR  category contains "mob"   (ignoring case)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Oppo X3 (Mobile), Poco X3 (Mobile)                                     │
//! │                                                                         │
//! │  Sale picker: GET /api/products/sellable                                │
//! │       Active AND qty > 0  ──►  Oppo X3                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use stockroom_core::validation::{
    validate_new_product, validate_product_patch, validate_search_query,
};
use stockroom_core::{Entity, Product, ProductPatch};
use tracing::{debug, info};

use super::{delete_existing, reject, update_existing};
use crate::error::ApiError;
use crate::state::{AppState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/sellable", get(list_sellable_products))
        .route(
            "/api/products/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    pub q: String,
}

pub async fn list_products(
    State(inventory): State<InventoryState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let start = Instant::now();
    debug!(q = %filter.q, "list_products command");

    let term = validate_search_query(&filter.q).map_err(reject("list_products"))?;
    let products: Vec<Product> = inventory.with_inventory(|inv| {
        inv.filter_products(&term).into_iter().cloned().collect()
    });

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        "list_products complete"
    );
    Ok(Json(products))
}

/// Products the sale screen may offer: Active with stock on hand.
pub async fn list_sellable_products(
    State(inventory): State<InventoryState>,
) -> Json<Vec<Product>> {
    debug!("list_sellable_products command");
    Json(inventory.with_inventory(|inv| inv.sellable_products().into_iter().cloned().collect()))
}

pub async fn get_product(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    debug!(id = %id, "get_product command");
    inventory
        .with_inventory(|inv| inv.products().get(&id).cloned())
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Product::KIND, &id))
}

pub async fn create_product(
    State(inventory): State<InventoryState>,
    Json(form): Json<ProductPatch>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    debug!(name = ?form.name, "create_product command");
    validate_new_product(&form).map_err(reject("create_product"))?;

    let created = inventory.with_inventory_mut(|inv| inv.products_mut().create(form).clone());

    info!(
        id = %created.id,
        name = %created.name,
        price = %created.price,
        qty = created.qty,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    debug!(id = %id, "update_product command");
    validate_product_patch(&patch).map_err(reject("update_product"))?;

    let updated = inventory
        .with_inventory_mut(|inv| update_existing(inv.products_mut(), &id, patch).cloned())?;

    info!(id = %id, qty = updated.qty, status = ?updated.status, "Product updated");
    Ok(Json(updated))
}

pub async fn delete_product(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "delete_product command");
    let removed = inventory.with_inventory_mut(|inv| delete_existing(inv.products_mut(), &id))?;

    info!(id = %id, name = %removed.name, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
