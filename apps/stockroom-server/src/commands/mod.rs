//! # Command Handlers
//!
//! One handler per screen action. Every handler follows the same shape:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request ──► debug!(entry) ──► validate ──┬──► warn!(rejected) ──► 4xx  │
//! │                                           │                             │
//! │                                           └──► mutate store ──► info!   │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                               200 / 201 / 204           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation and mutation run under one inventory lock, so a command sees
//! and changes a single consistent snapshot.
//!
//! Each handler declares only the state it needs:
//! ```rust,ignore
//! // Only needs the inventory
//! async fn list_products(State(inventory): State<InventoryState>, ...)
//!
//! // Needs both
//! async fn record_sale(
//!     State(inventory): State<InventoryState>,
//!     State(config): State<Arc<ConfigState>>,
//!     ...
//! )
//! ```

pub mod category;
pub mod component;
pub mod dashboard;
pub mod employee;
pub mod product;
pub mod sale;
pub mod supplier;

use axum::Router;
use stockroom_core::Entity;
use stockroom_store::Collection;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// All command routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(employee::routes())
        .merge(supplier::routes())
        .merge(category::routes())
        .merge(product::routes())
        .merge(sale::routes())
        .merge(component::routes())
        .merge(dashboard::routes())
}

/// Converts a rejection into an [`ApiError`] and logs it.
///
/// ```rust,ignore
/// validate_new_employee(&form).map_err(reject("create_employee"))?;
/// ```
pub(crate) fn reject<E>(command: &'static str) -> impl FnOnce(E) -> ApiError
where
    E: Into<ApiError>,
{
    move |err| {
        let err = err.into();
        warn!(command, code = ?err.code, message = %err.message, "Command rejected");
        err
    }
}

/// Merges `patch` into the entity with `id`, or reports it missing.
pub(crate) fn update_existing<'a, T: Entity>(
    collection: &'a mut Collection<T>,
    id: &str,
    patch: T::Patch,
) -> Result<&'a T, ApiError> {
    if !collection.contains(id) {
        return Err(ApiError::not_found(T::KIND, id));
    }
    collection.update(id, patch);
    collection
        .get(id)
        .ok_or_else(|| ApiError::not_found(T::KIND, id))
}

/// Deletes the entity with `id`, or reports it missing.
pub(crate) fn delete_existing<T: Entity>(
    collection: &mut Collection<T>,
    id: &str,
) -> Result<T, ApiError> {
    let removed = collection
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(T::KIND, id))?;
    collection.delete(id);
    Ok(removed)
}
