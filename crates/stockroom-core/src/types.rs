//! # Domain Types
//!
//! Entities held by the inventory store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐    │
//! │  │  Employee   │  │  Supplier   │  │  Category   │  │   Product   │    │
//! │  │  id         │  │  id         │  │  id         │  │  id         │    │
//! │  │  name/email │  │  invoice_no │  │  name       │  │  category ──┼─┐  │
//! │  │  user_type  │  │  name ◄─────┼──┼─────────────┼──┼─ supplier   │ │  │
//! │  └─────────────┘  └─────────────┘  └──────▲──────┘  │  price, qty │ │  │
//! │                                           └─────────┼─────────────┘─┘  │
//! │  ┌─────────────┐  ┌───────────────┐  ┌──────────────┴──┐               │
//! │  │    Sale     │  │ ComponentPart │  │ ComponentCounts │               │
//! │  │  product_id │  │  id, name     │  │  four counters  │               │
//! │  │  name/price │  │  quantity     │  │  (one record)   │               │
//! │  │  snapshot   │  └───────────────┘  └─────────────────┘               │
//! │  └─────────────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Denormalized Names
//! `Product::category` and `Product::supplier` hold copies of the related
//! entity's *name*, not its id. Renaming or deleting a category leaves
//! existing products holding the old string.
//!
//! ## Patches
//! Every collection entity has a `*Patch` type with all-optional fields.
//! `apply_patch` overwrites exactly the fields that are `Some` and leaves
//! everything else untouched. A full form submission is also a patch, so
//! new entities are built with [`Entity::from_patch`].
//!
//! Optional fields of an entity (employee `dob`/`doj`) take a double
//! `Option` in the patch: absent keeps the value, `null` or `""` clears it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Entity Trait
// =============================================================================

/// An element of an id-keyed store collection.
pub trait Entity: Clone + Default {
    /// Partial update accepted by `Collection::update`.
    type Patch;

    /// Human-readable entity name used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Overwrites the fields present in `patch`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Builds a new entity from defaults, an assigned id and a form patch.
    fn from_patch(id: String, patch: Self::Patch) -> Self {
        let mut entity = Self::default();
        entity.set_id(id);
        entity.apply_patch(patch);
        entity
    }
}

#[inline]
fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Reads a present date field as `Some`: a date sets it, `null` or a blank
/// string (an emptied date input) clears it. Absent fields never get here.
fn clearable_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<NaiveDate>()
            .map(|date| Some(Some(date)))
            .map_err(serde::de::Error::custom),
        _ => Ok(Some(None)),
    }
}

// =============================================================================
// Enumerations
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

/// Role of an employee account. Stored only; nothing enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UserType {
    Admin,
    #[default]
    Employee,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

// =============================================================================
// Employee
// =============================================================================

/// A staff member.
///
/// `password` is kept as entered; the store is single-user and performs no
/// authentication. It is never sent back to the screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub contact: String,
    /// Date of birth.
    #[ts(as = "Option<String>")]
    pub dob: Option<NaiveDate>,
    /// Date of joining.
    #[ts(as = "Option<String>")]
    pub doj: Option<NaiveDate>,
    pub password: String,
    pub user_type: UserType,
    pub address: String,
    /// Free text ("45000", "NA").
    pub salary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
    #[serde(deserialize_with = "clearable_date", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub dob: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "clearable_date", skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub doj: Option<Option<NaiveDate>>,
    pub password: Option<String>,
    pub user_type: Option<UserType>,
    pub address: Option<String>,
    pub salary: Option<String>,
}

impl Entity for Employee {
    type Patch = EmployeePatch;
    const KIND: &'static str = "Employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: EmployeePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.gender, patch.gender);
        merge(&mut self.contact, patch.contact);
        merge(&mut self.dob, patch.dob);
        merge(&mut self.doj, patch.doj);
        merge(&mut self.password, patch.password);
        merge(&mut self.user_type, patch.user_type);
        merge(&mut self.address, patch.address);
        merge(&mut self.salary, patch.salary);
    }
}

// =============================================================================
// Supplier
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supplier {
    pub id: String,
    pub invoice_no: String,
    pub name: String,
    pub contact: String,
    /// What the supplier provides ("Mobile Parts"). May be blank.
    #[serde(default)]
    pub component: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SupplierPatch {
    pub invoice_no: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub component: Option<String>,
    pub description: Option<String>,
}

impl Entity for Supplier {
    type Patch = SupplierPatch;
    const KIND: &'static str = "Supplier";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: SupplierPatch) {
        merge(&mut self.invoice_no, patch.invoice_no);
        merge(&mut self.name, patch.name);
        merge(&mut self.contact, patch.contact);
        merge(&mut self.component, patch.component);
        merge(&mut self.description, patch.description);
    }
}

// =============================================================================
// Category
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

impl Entity for Category {
    type Patch = CategoryPatch;
    const KIND: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: CategoryPatch) {
        merge(&mut self.name, patch.name);
    }
}

// =============================================================================
// Product
// =============================================================================

/// A stocked product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,
    /// Category name (copy, not an id).
    pub category: String,
    /// Supplier name (copy, not an id).
    pub supplier: String,
    pub name: String,
    pub price: Money,
    pub qty: u32,
    pub status: ProductStatus,
}

impl Product {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Active and with at least one unit in stock.
    pub fn is_sellable(&self) -> bool {
        self.is_active() && self.qty > 0
    }

    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity <= self.qty
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProductPatch {
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub name: Option<String>,
    pub price: Option<Money>,
    pub qty: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl Entity for Product {
    type Patch = ProductPatch;
    const KIND: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        merge(&mut self.category, patch.category);
        merge(&mut self.supplier, patch.supplier);
        merge(&mut self.name, patch.name);
        merge(&mut self.price, patch.price);
        merge(&mut self.qty, patch.qty);
        merge(&mut self.status, patch.status);
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale of one product line.
///
/// Uses the snapshot pattern: product name and unit price are frozen at the
/// time of sale, and `total` is computed once and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at time of sale.
    pub price: Money,
    pub total: Money,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub customer: String,
}

impl Sale {
    /// Creates a sale line from a product snapshot.
    ///
    /// A total that does not fit in `Money` clamps to the maximum;
    /// `validate_sale` rejects such sales before they get here.
    pub fn from_product(
        id: String,
        product: &Product,
        quantity: u32,
        customer: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Sale {
            id,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price: product.price,
            total: product
                .price
                .checked_mul(quantity)
                .unwrap_or(Money::from_minor(i64::MAX)),
            date,
            customer: customer.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SalePatch {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<Money>,
    pub total: Option<Money>,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    pub customer: Option<String>,
}

impl Entity for Sale {
    type Patch = SalePatch;
    const KIND: &'static str = "Sale";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: SalePatch) {
        merge(&mut self.product_id, patch.product_id);
        merge(&mut self.product_name, patch.product_name);
        merge(&mut self.quantity, patch.quantity);
        merge(&mut self.price, patch.price);
        merge(&mut self.total, patch.total);
        merge(&mut self.date, patch.date);
        merge(&mut self.customer, patch.customer);
    }
}

// =============================================================================
// Component Parts
// =============================================================================

/// A named stock line of loose component parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentPart {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ComponentPartPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
}

impl Entity for ComponentPart {
    type Patch = ComponentPartPatch;
    const KIND: &'static str = "ComponentPart";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: ComponentPartPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.quantity, patch.quantity);
    }
}

/// The dashboard's fixed set of component counters.
///
/// Replaced wholesale on save, never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComponentCounts {
    pub microchips: u32,
    pub circuit_boards: u32,
    pub processors: u32,
    pub storage_units: u32,
}

impl ComponentCounts {
    pub fn total(&self) -> u64 {
        [
            self.microchips,
            self.circuit_boards,
            self.processors,
            self.storage_units,
        ]
        .iter()
        .map(|&n| u64::from(n))
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oppo() -> Product {
        Product {
            id: "1".to_string(),
            category: "Mobile".to_string(),
            supplier: "Ajay".to_string(),
            name: "Oppo X3".to_string(),
            price: Money::from_major(69_000),
            qty: 45,
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut product = oppo();
        product.apply_patch(ProductPatch {
            qty: Some(40),
            status: Some(ProductStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(product.qty, 40);
        assert_eq!(product.status, ProductStatus::Inactive);
        assert_eq!(product.name, "Oppo X3");
        assert_eq!(product.price, Money::from_major(69_000));
        assert_eq!(product.category, "Mobile");
    }

    #[test]
    fn test_employee_dates_can_be_cleared() {
        let mut employee = Employee {
            dob: NaiveDate::from_ymd_opt(2000, 1, 1),
            doj: NaiveDate::from_ymd_opt(2020, 1, 20),
            ..Default::default()
        };

        let keep: EmployeePatch = serde_json::from_str(r#"{ "salary": "NA" }"#).unwrap();
        assert_eq!(keep.dob, None);
        employee.apply_patch(keep);
        assert_eq!(employee.dob, NaiveDate::from_ymd_opt(2000, 1, 1));

        let clear: EmployeePatch =
            serde_json::from_str(r#"{ "dob": null, "doj": "", "salary": "NA" }"#).unwrap();
        assert_eq!(clear.dob, Some(None));
        employee.apply_patch(clear);
        assert_eq!(employee.dob, None);
        assert_eq!(employee.doj, None);

        let set: EmployeePatch = serde_json::from_str(r#"{ "dob": "1999-12-31" }"#).unwrap();
        employee.apply_patch(set);
        assert_eq!(employee.dob, NaiveDate::from_ymd_opt(1999, 12, 31));

        assert!(serde_json::from_str::<EmployeePatch>(r#"{ "dob": "31-12-1999" }"#).is_err());
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut product = oppo();
        product.apply_patch(ProductPatch::default());
        assert_eq!(product, oppo());
    }

    #[test]
    fn test_from_patch_fills_defaults() {
        let employee = Employee::from_patch(
            "104".to_string(),
            EmployeePatch {
                name: Some("Test".to_string()),
                email: Some("t@x.com".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(employee.id, "104");
        assert_eq!(employee.name, "Test");
        assert_eq!(employee.gender, Gender::Male);
        assert_eq!(employee.user_type, UserType::Employee);
        assert!(employee.dob.is_none());
        assert!(employee.salary.is_empty());
    }

    #[test]
    fn test_sale_from_product_snapshots_price() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let sale = Sale::from_product("1".to_string(), &oppo(), 2, "Ravi", date);

        assert_eq!(sale.product_id, "1");
        assert_eq!(sale.product_name, "Oppo X3");
        assert_eq!(sale.price, Money::from_major(69_000));
        assert_eq!(sale.total, Money::from_major(138_000));
    }

    #[test]
    fn test_product_stock_checks() {
        let mut product = oppo();
        assert!(product.is_sellable());
        assert!(product.has_stock_for(45));
        assert!(!product.has_stock_for(46));

        product.qty = 0;
        assert!(!product.is_sellable());

        product.qty = 10;
        product.status = ProductStatus::Inactive;
        assert!(!product.is_sellable());
    }

    #[test]
    fn test_component_counts_total() {
        let counts = ComponentCounts {
            microchips: 150,
            circuit_boards: 75,
            processors: 50,
            storage_units: 100,
        };
        assert_eq!(counts.total(), 375);
        assert_eq!(ComponentCounts::default().total(), 0);
    }

    #[test]
    fn test_wire_format_uses_display_names() {
        let json = serde_json::to_value(UserType::Admin).unwrap();
        assert_eq!(json, "Admin");

        let supplier = Supplier {
            id: "1".to_string(),
            invoice_no: "1001".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&supplier).unwrap();
        assert_eq!(json["invoiceNo"], "1001");

        let patch: EmployeePatch = serde_json::from_str(r#"{"userType":"Admin"}"#).unwrap();
        assert_eq!(patch.user_type, Some(UserType::Admin));
        assert!(patch.name.is_none());
    }
}
