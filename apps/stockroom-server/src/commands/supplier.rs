//! # Supplier Commands
//!
//! The supplier screen: a table of suppliers and an add/edit form.
//!
//! Products carry the supplier's name as a copy. Renaming or deleting a
//! supplier leaves those copies alone; delete logs how many products still
//! name it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use stockroom_core::validation::{validate_new_supplier, validate_supplier_patch};
use stockroom_core::{Supplier, SupplierPatch};
use tracing::{debug, info, warn};

use super::{delete_existing, reject, update_existing};
use crate::error::ApiError;
use crate::state::{AppState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/api/suppliers/{id}",
            put(update_supplier).delete(delete_supplier),
        )
}

pub async fn list_suppliers(State(inventory): State<InventoryState>) -> Json<Vec<Supplier>> {
    debug!("list_suppliers command");
    Json(inventory.with_inventory(|inv| inv.suppliers().as_slice().to_vec()))
}

pub async fn create_supplier(
    State(inventory): State<InventoryState>,
    Json(form): Json<SupplierPatch>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    debug!(name = ?form.name, "create_supplier command");
    validate_new_supplier(&form).map_err(reject("create_supplier"))?;

    let created = inventory.with_inventory_mut(|inv| inv.suppliers_mut().create(form).clone());

    info!(id = %created.id, name = %created.name, "Supplier created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_supplier(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
    Json(patch): Json<SupplierPatch>,
) -> Result<Json<Supplier>, ApiError> {
    debug!(id = %id, "update_supplier command");
    validate_supplier_patch(&patch).map_err(reject("update_supplier"))?;

    let updated = inventory
        .with_inventory_mut(|inv| update_existing(inv.suppliers_mut(), &id, patch).cloned())?;

    info!(id = %id, "Supplier updated");
    Ok(Json(updated))
}

pub async fn delete_supplier(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "delete_supplier command");

    let (removed, still_named) = inventory.with_inventory_mut(|inv| {
        let removed = delete_existing(inv.suppliers_mut(), &id)?;
        let still_named = inv.products_from_supplier(&removed.name).len();
        Ok::<_, ApiError>((removed, still_named))
    })?;

    info!(id = %id, name = %removed.name, "Supplier deleted");
    if still_named > 0 {
        warn!(
            supplier = %removed.name,
            products = still_named,
            "Deleted supplier is still named by products"
        );
    }
    Ok(StatusCode::NO_CONTENT)
}
