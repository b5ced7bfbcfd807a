//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! Entity types, money arithmetic and the validation rules the screens apply
//! before calling the store. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Screens (web front end)                         │   │
//! │  │   Employees · Suppliers · Categories · Products · Sales · ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-server commands                       │   │
//! │  │   validate ──► mutate store ──► respond                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │   types · money · validation · error                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          stockroom-store (in-memory collections)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, their patches and the [`Entity`] trait
//! - [`money`] - Integer money in minor units
//! - [`error`] - Domain error types
//! - [`validation`] - Form rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Entity, Money, Product, ProductPatch};
//!
//! let mut product = Product::from_patch(
//!     "3".to_string(),
//!     ProductPatch {
//!         name: Some("Pixel 8".to_string()),
//!         price: Some(Money::from_major(52_000)),
//!         qty: Some(10),
//!         ..Default::default()
//!     },
//! );
//!
//! product.apply_patch(ProductPatch { qty: Some(8), ..Default::default() });
//! assert_eq!(product.qty, 8);
//! assert_eq!(product.name, "Pixel 8");
//! ```

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
