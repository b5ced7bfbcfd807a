//! # stockroom-store: In-Memory Entity Store
//!
//! Holds every collection for the lifetime of the process. Nothing is
//! written to disk; a restart returns to the seed data.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   SeedData::builtin() ─┐                                                │
//! │                        ├──► Inventory::from_seed ──► Inventory          │
//! │   seed.json ───────────┘                                │               │
//! │                                                         │               │
//! │        command ──► employees_mut().create(form) ────────┤               │
//! │        command ──► products_mut().update(id, patch) ────┤               │
//! │        command ──► record_sale(sale, deduct) ───────────┤               │
//! │                                                         ▼               │
//! │        screen ◄── search_employees / dashboard ◄── read views          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`collection`] - Ordered storage with add / update / delete
//! - [`sequence`] - Id allocation that never reuses a deleted id
//! - [`inventory`] - The application-state object
//! - [`query`] - Searches, filters and aggregates
//! - [`seed`] - Initial data
//! - [`error`] - Seed loading errors
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_store::{EmployeeSearchField, Inventory};
//! use stockroom_core::EmployeePatch;
//!
//! let mut inventory = Inventory::seeded();
//! inventory.employees_mut().create(EmployeePatch {
//!     name: Some("Test".to_string()),
//!     email: Some("t@x.com".to_string()),
//!     ..Default::default()
//! });
//!
//! let found = inventory.search_employees(EmployeeSearchField::Name, "test");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, "104");
//! ```

pub mod collection;
pub mod error;
pub mod inventory;
pub mod query;
pub mod seed;
pub mod sequence;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use inventory::{Inventory, EMPLOYEE_ID_FLOOR};
pub use query::{DashboardSummary, EmployeeSearchField, DASHBOARD_PREVIEW_LEN};
pub use seed::SeedData;
pub use sequence::IdSequence;
