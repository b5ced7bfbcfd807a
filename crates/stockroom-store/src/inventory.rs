//! # Inventory
//!
//! The application-state object: every collection plus the component
//! counters, owned by whoever constructs it.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory                                       │
//! │                                                                         │
//! │  employees        Collection<Employee>       counter, floor 100         │
//! │  suppliers        Collection<Supplier>       counter                    │
//! │  categories       Collection<Category>       counter                    │
//! │  products         Collection<Product>        counter                    │
//! │  sales            Collection<Sale>           counter                    │
//! │  component_parts  Collection<ComponentPart>  uuid                       │
//! │  components       ComponentCounts            replaced wholesale         │
//! │                                                                         │
//! │  No global instance. The server keeps one behind a mutex and hands      │
//! │  commands a reference for the duration of a single call.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{
    Category, ComponentCounts, ComponentPart, Employee, Product, Sale, Supplier,
};
use tracing::{debug, info};

use crate::collection::Collection;
use crate::seed::SeedData;
use crate::sequence::IdSequence;

/// Employee ids start above this value.
pub const EMPLOYEE_ID_FLOOR: u64 = 100;

/// All entity state for one session.
#[derive(Debug, Clone)]
pub struct Inventory {
    employees: Collection<Employee>,
    suppliers: Collection<Supplier>,
    categories: Collection<Category>,
    products: Collection<Product>,
    sales: Collection<Sale>,
    component_parts: Collection<ComponentPart>,
    components: ComponentCounts,
}

impl Inventory {
    /// An inventory with nothing in it.
    pub fn empty() -> Self {
        Self::from_seed(SeedData::default())
    }

    /// An inventory holding the built-in sample data.
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::builtin())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let inventory = Inventory {
            employees: Collection::with_items(
                seed.employees,
                IdSequence::counter(EMPLOYEE_ID_FLOOR),
            ),
            suppliers: Collection::with_items(seed.suppliers, IdSequence::counter(0)),
            categories: Collection::with_items(seed.categories, IdSequence::counter(0)),
            products: Collection::with_items(seed.products, IdSequence::counter(0)),
            sales: Collection::with_items(seed.sales, IdSequence::counter(0)),
            component_parts: Collection::with_items(seed.component_parts, IdSequence::uuid()),
            components: seed.components,
        };

        info!(
            employees = inventory.employees.len(),
            suppliers = inventory.suppliers.len(),
            categories = inventory.categories.len(),
            products = inventory.products.len(),
            sales = inventory.sales.len(),
            component_parts = inventory.component_parts.len(),
            "Inventory initialised"
        );

        inventory
    }

    // =========================================================================
    // Collection Access
    // =========================================================================

    pub fn employees(&self) -> &Collection<Employee> {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut Collection<Employee> {
        &mut self.employees
    }

    pub fn suppliers(&self) -> &Collection<Supplier> {
        &self.suppliers
    }

    pub fn suppliers_mut(&mut self) -> &mut Collection<Supplier> {
        &mut self.suppliers
    }

    pub fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut Collection<Category> {
        &mut self.categories
    }

    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut Collection<Product> {
        &mut self.products
    }

    pub fn sales(&self) -> &Collection<Sale> {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut Collection<Sale> {
        &mut self.sales
    }

    pub fn component_parts(&self) -> &Collection<ComponentPart> {
        &self.component_parts
    }

    pub fn component_parts_mut(&mut self) -> &mut Collection<ComponentPart> {
        &mut self.component_parts
    }

    // =========================================================================
    // Component Counters
    // =========================================================================

    pub fn components(&self) -> ComponentCounts {
        self.components
    }

    /// Replaces all four counters at once. Nothing is merged.
    pub fn update_components(&mut self, counts: ComponentCounts) {
        debug!(?counts, "update_components");
        self.components = counts;
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Appends a sale and, when `deduct_stock` is set, lowers the sold
    /// product's quantity by the sale quantity (never below zero).
    ///
    /// Stock is not checked here; the sale command has already done so.
    pub fn record_sale(&mut self, sale: Sale, deduct_stock: bool) {
        if deduct_stock {
            if let Some(product) = self.products.get_mut(&sale.product_id) {
                let before = product.qty;
                product.qty = product.qty.saturating_sub(sale.quantity);
                debug!(
                    product_id = %product.id,
                    before,
                    after = product.qty,
                    "Stock deducted for sale"
                );
            }
        }
        self.sales.add(sale);
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::seeded()
    }
}
