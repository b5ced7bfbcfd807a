//! # Validation Module
//!
//! Form rules applied at the screen boundary, immediately before a store
//! mutator is called.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request decoding (serde)                                     │
//! │  ├── Types: enums, non-negative integers, dates                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command handler                                              │
//! │  └── THIS MODULE: required fields, duplicates, stock                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Accepts every call. Never rejects.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed rule aborts the command with no mutation; the caller keeps the
//! submitted values and shows the message.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, EmployeePatch, Product, ProductPatch, SupplierPatch};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted search term.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Highest accepted unit price: ₹1,00,00,00,000.00 (one billion rupees).
pub const MAX_PRICE: Money = Money::from_major(1_000_000_000);

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
///
/// ```rust
/// use stockroom_core::validation::validate_required;
///
/// assert!(validate_required("name", "Megha").is_ok());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// A field that must be present on create.
fn require_present(field: &str, value: Option<&str>) -> ValidationResult<()> {
    validate_required(field, value.unwrap_or_default())
}

/// A field that may be omitted on update but not blanked.
fn reject_blank(field: &str, value: Option<&str>) -> ValidationResult<()> {
    match value {
        Some(v) => validate_required(field, v),
        None => Ok(()),
    }
}

/// Validates a search term and returns it trimmed.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Entity Forms
// =============================================================================

/// Name and email are required for a new employee.
pub fn validate_new_employee(form: &EmployeePatch) -> ValidationResult<()> {
    require_present("name", form.name.as_deref())?;
    require_present("email", form.email.as_deref())
}

pub fn validate_employee_patch(patch: &EmployeePatch) -> ValidationResult<()> {
    reject_blank("name", patch.name.as_deref())?;
    reject_blank("email", patch.email.as_deref())
}

/// Invoice number and name are required for a new supplier.
pub fn validate_new_supplier(form: &SupplierPatch) -> ValidationResult<()> {
    require_present("invoiceNo", form.invoice_no.as_deref())?;
    require_present("name", form.name.as_deref())
}

pub fn validate_supplier_patch(patch: &SupplierPatch) -> ValidationResult<()> {
    reject_blank("invoiceNo", patch.invoice_no.as_deref())?;
    reject_blank("name", patch.name.as_deref())
}

/// Name, category and supplier are required for a new product.
///
/// Quantity is non-negative by type; price is checked against
/// `0..=MAX_PRICE`.
pub fn validate_new_product(form: &ProductPatch) -> ValidationResult<()> {
    require_present("name", form.name.as_deref())?;
    require_present("category", form.category.as_deref())?;
    require_present("supplier", form.supplier.as_deref())?;
    validate_price(form.price)
}

pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    reject_blank("name", patch.name.as_deref())?;
    reject_blank("category", patch.category.as_deref())?;
    reject_blank("supplier", patch.supplier.as_deref())?;
    validate_price(patch.price)
}

/// Price, when given, must lie in `0..=MAX_PRICE`.
fn validate_price(price: Option<Money>) -> ValidationResult<()> {
    match price {
        Some(p) if p.is_negative() => Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        }),
        Some(p) if p > MAX_PRICE => Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE,
        }),
        _ => Ok(()),
    }
}

/// Validates a new category name against the existing ones.
///
/// ## Rules
/// - Must not be blank
/// - Must not equal an existing name, ignoring case and surrounding spaces
///
/// ## Returns
/// The trimmed name to store.
///
/// ```rust
/// use stockroom_core::types::Category;
/// use stockroom_core::validation::validate_category_name;
///
/// let existing = vec![Category { id: "1".into(), name: "Electronics".into() }];
/// assert!(validate_category_name("electronics", &existing).is_err());
/// assert_eq!(validate_category_name(" Toys ", &existing).unwrap(), "Toys");
/// ```
pub fn validate_category_name<'a, I>(name: &str, existing: I) -> ValidationResult<String>
where
    I: IntoIterator<Item = &'a Category>,
{
    validate_required("name", name)?;

    let name = name.trim();
    let lowered = name.to_lowercase();
    if existing
        .into_iter()
        .any(|c| c.name.trim().to_lowercase() == lowered)
    {
        return Err(ValidationError::Duplicate {
            field: "category".to_string(),
            value: name.to_string(),
        });
    }

    Ok(name.to_string())
}

pub fn validate_component_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)
}

// =============================================================================
// Sale
// =============================================================================

/// Validates a sale before it is recorded.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sales: Record Sale                                                     │
/// │                                                                         │
/// │  customer blank?            → "customer is required"                   │
/// │  quantity == 0?             → "quantity must be positive"              │
/// │  product Inactive?          → ProductInactive                          │
/// │  quantity > product.qty?    → InsufficientStock                        │
/// │  price × quantity overflow? → "total must be at most ..."              │
/// │  otherwise                  → OK, record sale                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale(product: &Product, quantity: u32, customer: &str) -> CoreResult<()> {
    validate_required("customer", customer)?;

    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    if !product.is_active() {
        return Err(CoreError::ProductInactive(product.id.clone()));
    }

    if !product.has_stock_for(quantity) {
        return Err(CoreError::InsufficientStock {
            product: product.name.clone(),
            available: product.qty,
            requested: quantity,
        });
    }

    // Seed files bypass the price cap, so the product of the two can still overflow
    if product.price.checked_mul(quantity).is_none() {
        return Err(ValidationError::TooLarge {
            field: "total".to_string(),
            max: Money::from_minor(i64::MAX),
        }
        .into());
    }

    Ok(())
}
