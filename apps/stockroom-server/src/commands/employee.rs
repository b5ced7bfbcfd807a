//! # Employee Commands
//!
//! The employee screen: a searchable table and a form that saves new
//! employees or edits the selected one.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Employee Search                                      │
//! │                                                                         │
//! │  [ Name ▼ ] [ meg          ] 🔍                                         │
//! │       │            │                                                    │
//! │       ▼            ▼                                                    │
//! │  GET /api/employees?field=name&q=meg                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  case-insensitive substring on the chosen field                         │
//! │  (empty q returns everyone)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<EmployeeDto>  (no passwords)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockroom_core::validation::{
    validate_employee_patch, validate_new_employee, validate_search_query,
};
use stockroom_core::{Employee, EmployeePatch, Gender, UserType};
use stockroom_store::EmployeeSearchField;
use tracing::{debug, info};

use super::{delete_existing, reject, update_existing};
use crate::error::ApiError;
use crate::state::{AppState, InventoryState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            put(update_employee).delete(delete_employee),
        )
}

/// Employee as shown on screen. The password is write-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub contact: String,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    pub user_type: UserType,
    pub address: String,
    pub salary: String,
}

impl From<&Employee> for EmployeeDto {
    fn from(e: &Employee) -> Self {
        EmployeeDto {
            id: e.id.clone(),
            name: e.name.clone(),
            email: e.email.clone(),
            gender: e.gender,
            contact: e.contact.clone(),
            dob: e.dob,
            doj: e.doj,
            user_type: e.user_type,
            address: e.address.clone(),
            salary: e.salary.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeSearch {
    pub field: EmployeeSearchField,
    pub q: String,
}

pub async fn list_employees(
    State(inventory): State<InventoryState>,
    Query(search): Query<EmployeeSearch>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let start = Instant::now();
    debug!(field = %search.field, q = %search.q, "list_employees command");

    let term = validate_search_query(&search.q).map_err(reject("list_employees"))?;
    let dtos: Vec<EmployeeDto> = inventory.with_inventory(|inv| {
        inv.search_employees(search.field, &term)
            .into_iter()
            .map(EmployeeDto::from)
            .collect()
    });

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "list_employees complete"
    );
    Ok(Json(dtos))
}

pub async fn create_employee(
    State(inventory): State<InventoryState>,
    Json(form): Json<EmployeePatch>,
) -> Result<(StatusCode, Json<EmployeeDto>), ApiError> {
    debug!(name = ?form.name, "create_employee command");
    validate_new_employee(&form).map_err(reject("create_employee"))?;

    let created =
        inventory.with_inventory_mut(|inv| EmployeeDto::from(inv.employees_mut().create(form)));

    info!(id = %created.id, name = %created.name, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_employee(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<EmployeeDto>, ApiError> {
    debug!(id = %id, "update_employee command");
    validate_employee_patch(&patch).map_err(reject("update_employee"))?;

    let updated = inventory.with_inventory_mut(|inv| {
        update_existing(inv.employees_mut(), &id, patch).map(EmployeeDto::from)
    })?;

    info!(id = %id, "Employee updated");
    Ok(Json(updated))
}

pub async fn delete_employee(
    State(inventory): State<InventoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "delete_employee command");
    let removed = inventory.with_inventory_mut(|inv| delete_existing(inv.employees_mut(), &id))?;

    info!(id = %id, name = %removed.name, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::commands::test_support::{app, send};

    #[tokio::test]
    async fn test_add_employee_then_search_by_name() {
        let (app, _) = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "name": "Test", "email": "t@x.com", "password": "secret" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "104");
        assert!(created.get("password").is_none());

        let (_, all) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (status, found) =
            send(&app, Method::GET, "/api/employees?field=name&q=test", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["email"], "t@x.com");
    }

    #[tokio::test]
    async fn test_search_by_email_field() {
        let (app, _) = app();
        let (_, found) = send(
            &app,
            Method::GET,
            "/api/employees?field=email&q=MEGHA@",
            None,
        )
        .await;
        assert_eq!(found.as_array().unwrap().len(), 1);
        assert_eq!(found[0]["id"], "103");
    }

    #[tokio::test]
    async fn test_create_without_name_is_rejected() {
        let (app, inventory) = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "name": "  ", "email": "t@x.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(inventory.with_inventory(|inv| inv.employees().len()), 2);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_password() {
        let (app, inventory) = app();
        let (status, updated) = send(
            &app,
            Method::PUT,
            "/api/employees/103",
            Some(json!({ "salary": "50000" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["salary"], "50000");
        assert_eq!(updated["name"], "Megha");
        let password =
            inventory.with_inventory(|inv| inv.employees().get("103").unwrap().password.clone());
        assert_eq!(password, "123456");
    }

    #[tokio::test]
    async fn test_update_clears_dates() {
        let (app, _) = app();

        let (_, kept) = send(
            &app,
            Method::PUT,
            "/api/employees/102",
            Some(json!({ "contact": "9000000000" })),
        )
        .await;
        assert_eq!(kept["dob"], "2000-01-01");

        let (status, cleared) = send(
            &app,
            Method::PUT,
            "/api/employees/102",
            Some(json!({ "dob": "", "doj": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(cleared["dob"].is_null());
        assert!(cleared["doj"].is_null());
        assert_eq!(cleared["contact"], "9000000000");
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let (app, inventory) = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/employees/999",
            Some(json!({ "name": "Ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::DELETE, "/api/employees/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(inventory.with_inventory(|inv| inv.employees().len()), 2);
    }

    #[tokio::test]
    async fn test_delete_then_new_id_is_fresh() {
        let (app, _) = app();

        let (status, _) = send(&app, Method::DELETE, "/api/employees/103", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, created) = send(
            &app,
            Method::POST,
            "/api/employees",
            Some(json!({ "name": "Asha", "email": "asha@x.com" })),
        )
        .await;
        assert_eq!(created["id"], "104");
    }
}
