//! # Component Commands
//!
//! Two independent views of component stock:
//!
//! - Component parts: a collection of named lines with a quantity each
//! - Component counts: four fixed counters, replaced all at once by the
//!   dashboard's edit form
//!
//! Nothing keeps the two in step.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use stockroom_core::validation::validate_component_name;
use stockroom_core::{ComponentCounts, ComponentPart, ComponentPartPatch};
use tracing::{debug, info};

use super::{delete_existing, reject};
use crate::error::ApiError;
use crate::state::{AppState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/component-parts",
            get(list_component_parts).post(create_component_part),
        )
        .route("/api/component-parts/{id}", delete(delete_component_part))
        .route("/api/components", get(get_components).put(update_components))
}

pub async fn list_component_parts(
    State(inventory): State<InventoryState>,
) -> Json<Vec<ComponentPart>> {
    debug!("list_component_parts command");
    Json(inventory.with_inventory(|inv| inv.component_parts().as_slice().to_vec()))
}

pub async fn create_component_part(
    State(inventory): State<InventoryState>,
    Json(form): Json<ComponentPartPatch>,
) -> Result<(StatusCode, Json<ComponentPart>), ApiError> {
    debug!(name = ?form.name, "create_component_part command");
    validate_component_name(form.name.as_deref().unwrap_or_default())
        .map_err(reject("create_component_part"))?;

    let created =
        inventory.with_inventory_mut(|inv| inv.component_parts_mut().create(form).clone());

    info!(
        id = %created.id,
        name = %created.name,
        quantity = created.quantity,
        "Component part created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_component_part(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "delete_component_part command");
    let removed =
        inventory.with_inventory_mut(|inv| delete_existing(inv.component_parts_mut(), &id))?;

    info!(id = %id, name = %removed.name, "Component part deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_components(State(inventory): State<InventoryState>) -> Json<ComponentCounts> {
    debug!("get_components command");
    Json(inventory.with_inventory(|inv| inv.components()))
}

/// Replaces all four counters. Every field must be present.
pub async fn update_components(
    State(inventory): State<InventoryState>,
    Json(counts): Json<ComponentCounts>,
) -> Json<ComponentCounts> {
    debug!(?counts, "update_components command");
    inventory.with_inventory_mut(|inv| inv.update_components(counts));

    info!(total = counts.total(), "Component counts replaced");
    Json(counts)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::commands::test_support::{app, send};

    #[tokio::test]
    async fn test_component_parts_lifecycle() {
        let (app, inventory) = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/component-parts",
            Some(json!({ "name": "Sensors", "quantity": 25 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_ne!(id, "5");

        let (_, parts) = send(&app, Method::GET, "/api/component-parts", None).await;
        assert_eq!(parts.as_array().unwrap().len(), 5);
        assert_eq!(
            inventory.with_inventory(|inv| inv.total_component_part_quantity()),
            400
        );

        let uri = format!("/api/component-parts/{}", id);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_component_part_requires_name() {
        let (app, _) = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/component-parts",
            Some(json!({ "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_counts_replaced_wholesale() {
        let (app, _) = app();

        let (_, before) = send(&app, Method::GET, "/api/components", None).await;
        assert_eq!(before["circuitBoards"], 75);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/components",
            Some(json!({
                "microchips": 10,
                "circuitBoards": 20,
                "processors": 30,
                "storageUnits": 40
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, after) = send(&app, Method::GET, "/api/components", None).await;
        assert_eq!(after["microchips"], 10);
        assert_eq!(after["storageUnits"], 40);
    }
}
