//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations (stock, status)       │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Seed loading at startup only                   │
//! │                                                                         │
//! │  stockroom-server errors                                               │
//! │  └── ApiError         - What the screen sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store itself never fails a mutation, so there is no error variant
//! for "update did not match": those calls are silent no-ops.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised before a store mutation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product exists but is marked Inactive and cannot be sold.
    #[error("Product {0} is inactive")]
    ProductInactive(String),

    /// Sale quantity exceeds the product's available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Record Sale (qty: 50)
    ///      │
    ///      ▼
    /// Check stock: Oppo X3 qty=45
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Oppo X3", available: 45, requested: 50 }
    ///      │
    ///      ▼
    /// Screen shows: "Insufficient stock"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount above what the shop can record.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: Money },

    /// Duplicate value (e.g. a category name that already exists).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
