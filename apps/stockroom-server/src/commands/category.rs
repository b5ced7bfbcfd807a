//! # Category Commands
//!
//! Categories are a flat list of names. Adding checks the name against the
//! existing ones, ignoring case:
//!
//! ```text
//! existing: Electronics, Clothes, Mobile
//!
//! POST { "name": "electronics" } ──► 409 DUPLICATE   (nothing added)
//! POST { "name": " Toys " }      ──► 201 { id: "4", name: "Toys" }
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use stockroom_core::validation::validate_category_name;
use stockroom_core::{Category, CategoryPatch};
use tracing::{debug, info, warn};

use super::{delete_existing, reject};
use crate::error::ApiError;
use crate::state::{AppState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/categories/{id}", delete(delete_category))
}

pub async fn list_categories(State(inventory): State<InventoryState>) -> Json<Vec<Category>> {
    debug!("list_categories command");
    Json(inventory.with_inventory(|inv| inv.categories().as_slice().to_vec()))
}

pub async fn create_category(
    State(inventory): State<InventoryState>,
    Json(form): Json<CategoryPatch>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let requested = form.name.unwrap_or_default();
    debug!(name = %requested, "create_category command");

    let created = inventory
        .with_inventory_mut(|inv| {
            let name = validate_category_name(&requested, inv.categories())?;
            Ok::<_, ApiError>(
                inv.categories_mut()
                    .create(CategoryPatch { name: Some(name) })
                    .clone(),
            )
        })
        .map_err(reject("create_category"))?;

    info!(id = %created.id, name = %created.name, "Category created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_category(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "delete_category command");

    let (removed, still_named) = inventory.with_inventory_mut(|inv| {
        let removed = delete_existing(inv.categories_mut(), &id)?;
        let still_named = inv.products_in_category(&removed.name).len();
        Ok::<_, ApiError>((removed, still_named))
    })?;

    info!(id = %id, name = %removed.name, "Category deleted");
    if still_named > 0 {
        warn!(
            category = %removed.name,
            products = still_named,
            "Deleted category is still named by products"
        );
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::commands::test_support::{app, send};

    #[tokio::test]
    async fn test_duplicate_category_rejected() {
        let (app, inventory) = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/categories",
            Some(json!({ "name": "electronics" })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DUPLICATE");
        assert_eq!(inventory.with_inventory(|inv| inv.categories().len()), 3);
    }

    #[tokio::test]
    async fn test_new_category_is_trimmed() {
        let (app, _) = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/categories",
            Some(json!({ "name": " Toys " })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "4");
        assert_eq!(created["name"], "Toys");

        let (_, all) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(all.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_blank_category_rejected() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::POST, "/api/categories", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_delete_category() {
        let (app, inventory) = app();

        let (status, _) = send(&app, Method::DELETE, "/api/categories/3", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        inventory.with_inventory(|inv| {
            assert_eq!(inv.categories().len(), 2);
            assert_eq!(inv.products().get("1").unwrap().category, "Mobile");
        });

        let (status, _) = send(&app, Method::DELETE, "/api/categories/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
