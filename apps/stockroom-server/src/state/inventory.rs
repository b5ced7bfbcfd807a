//! # Inventory State
//!
//! The session's [`Inventory`] shared between request handlers.
//!
//! ## Thread Safety
//! The inventory is wrapped in `Arc<Mutex<T>>` because:
//! 1. Requests are served concurrently
//! 2. A command validates against the current data and then mutates it;
//!    both steps must see the same snapshot
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State Operations                           │
//! │                                                                         │
//! │  Screen Action          Handler                 Lock                    │
//! │  ─────────────          ───────                 ────                    │
//! │                                                                         │
//! │  Search table ────────► list_employees() ─────► with_inventory          │
//! │                                                                         │
//! │  Save form ───────────► create_product() ─────► with_inventory_mut      │
//! │                         (validate + add under one lock)                 │
//! │                                                                         │
//! │  Record sale ─────────► record_sale() ────────► with_inventory_mut      │
//! │                         (stock check + append under one lock)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use stockroom_store::Inventory;

/// Shared handle to the session inventory.
#[derive(Debug, Clone)]
pub struct InventoryState {
    inventory: Arc<Mutex<Inventory>>,
}

impl InventoryState {
    pub fn new(inventory: Inventory) -> Self {
        InventoryState {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ```rust,ignore
    /// let summary = inventory_state.with_inventory(|inv| inv.dashboard());
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        // Store mutations are single-step; data behind a poisoned lock is
        // still consistent.
        let inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&inventory)
    }

    /// Executes a function with write access to the inventory.
    ///
    /// ```rust,ignore
    /// inventory_state.with_inventory_mut(|inv| inv.update_components(counts));
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inventory)
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(Inventory::seeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ComponentCounts;

    #[test]
    fn test_clones_share_one_inventory() {
        let state = InventoryState::default();
        let other = state.clone();

        other.with_inventory_mut(|inv| {
            inv.update_components(ComponentCounts {
                microchips: 7,
                ..Default::default()
            })
        });

        assert_eq!(state.with_inventory(|inv| inv.components().microchips), 7);
    }
}
