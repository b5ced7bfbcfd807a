//! # Seed Data
//!
//! The records present when the process starts. There is no persistence,
//! so every restart returns to this state.
//!
//! ## Sources
//! - [`SeedData::builtin`]: the hard-coded sample shop
//! - [`SeedData::from_json_file`]: an operator-supplied file with the same
//!   shape, for demos and tests
//!
//! ```json
//! {
//!   "employees": [],
//!   "suppliers": [],
//!   "categories": [{ "id": "1", "name": "Electronics" }],
//!   "products": [],
//!   "sales": [],
//!   "componentParts": [],
//!   "components": { "microchips": 0, "circuitBoards": 0, "processors": 0, "storageUnits": 0 }
//! }
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockroom_core::{
    Category, ComponentCounts, ComponentPart, Employee, Gender, Money, Product, ProductStatus,
    Sale, Supplier, UserType,
};
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Initial contents of every collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub employees: Vec<Employee>,
    pub suppliers: Vec<Supplier>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub component_parts: Vec<ComponentPart>,
    pub components: ComponentCounts,
}

impl SeedData {
    /// Parses seed JSON. Missing collections are empty.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::SeedLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json_str(&contents)?;
        info!(?path, "Loaded seed data from file");
        Ok(seed)
    }

    /// The built-in sample shop.
    pub fn builtin() -> Self {
        SeedData {
            employees: vec![
                Employee {
                    id: "102".to_string(),
                    name: "Rangesh".to_string(),
                    email: "webcode867@gmail.com".to_string(),
                    gender: Gender::Male,
                    contact: "9876543210".to_string(),
                    dob: NaiveDate::from_ymd_opt(2000, 1, 1),
                    doj: NaiveDate::from_ymd_opt(2020, 1, 20),
                    password: "123456".to_string(),
                    user_type: UserType::Admin,
                    address: "xyz".to_string(),
                    salary: "NA".to_string(),
                },
                Employee {
                    id: "103".to_string(),
                    name: "Megha".to_string(),
                    email: "megha@gmail.com".to_string(),
                    gender: Gender::Female,
                    contact: "9876543210".to_string(),
                    dob: NaiveDate::from_ymd_opt(2001, 1, 1),
                    doj: NaiveDate::from_ymd_opt(2020, 1, 20),
                    password: "123456".to_string(),
                    user_type: UserType::Employee,
                    address: "xyz".to_string(),
                    salary: "45000".to_string(),
                },
            ],
            suppliers: vec![
                supplier("1", "1001", "Ajay", "Mobile Parts"),
                supplier("2", "1002", "Ajay2", "Electronics"),
            ],
            categories: ["Electronics", "Clothes", "Mobile"]
                .iter()
                .zip(1..)
                .map(|(name, id)| Category {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            products: vec![
                product("1", "Oppo X3", 69_000, 45, ProductStatus::Active),
                product("2", "Poco X3", 21_000, 100, ProductStatus::Inactive),
            ],
            sales: Vec::new(),
            component_parts: [
                ("Microchips", 150),
                ("Circuit Boards", 75),
                ("Processors", 50),
                ("Storage Units", 100),
            ]
            .iter()
            .zip(1..)
            .map(|(&(name, quantity), id)| ComponentPart {
                id: id.to_string(),
                name: name.to_string(),
                quantity,
            })
            .collect(),
            components: ComponentCounts {
                microchips: 150,
                circuit_boards: 75,
                processors: 50,
                storage_units: 100,
            },
        }
    }
}

fn supplier(id: &str, invoice_no: &str, name: &str, component: &str) -> Supplier {
    Supplier {
        id: id.to_string(),
        invoice_no: invoice_no.to_string(),
        name: name.to_string(),
        contact: "987654321".to_string(),
        component: component.to_string(),
        description: "XYZ".to_string(),
    }
}

fn product(id: &str, name: &str, rupees: i64, qty: u32, status: ProductStatus) -> Product {
    Product {
        id: id.to_string(),
        category: "Mobile".to_string(),
        supplier: "Ajay".to_string(),
        name: name.to_string(),
        price: Money::from_major(rupees),
        qty,
        status,
    }
}
