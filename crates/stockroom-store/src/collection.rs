//! # Collection
//!
//! An ordered, id-keyed list of one entity type with the store's three
//! mutation primitives.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Collection<T> Operations                             │
//! │                                                                         │
//! │  Screen Action          Call                    Effect                  │
//! │  ─────────────          ────                    ──────                  │
//! │                                                                         │
//! │  Save (new) ──────────► add(item) ────────────► items.push(item)       │
//! │                                                                         │
//! │  Save (editing) ──────► update(id, patch) ────► merge into match       │
//! │                                                 (no match: nothing)    │
//! │                                                                         │
//! │  Delete ──────────────► delete(id) ───────────► retain(id != ...)      │
//! │                                                 (no match: nothing)    │
//! │                                                                         │
//! │  Table / search ──────► iter(), get(id) ──────► read only              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of the mutators report whether an id matched. Callers that need to
//! tell "updated" from "not found" check [`Collection::contains`] first.
//! Insertion order is preserved; `add` does not check id uniqueness.

use std::slice;

use stockroom_core::Entity;
use tracing::debug;

use crate::sequence::IdSequence;

/// Ordered storage for one entity type.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    ids: IdSequence,
}

impl<T: Entity> Collection<T> {
    /// Creates an empty collection.
    pub fn new(ids: IdSequence) -> Self {
        Collection {
            items: Vec::new(),
            ids,
        }
    }

    /// Creates a collection holding `items` in the given order.
    ///
    /// The id sequence is advanced past every numeric id in `items`.
    pub fn with_items(items: Vec<T>, mut ids: IdSequence) -> Self {
        for item in &items {
            ids.observe(item.id());
        }
        Collection { items, ids }
    }

    /// Allocates a fresh id without adding anything.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Appends `item` to the end of the collection.
    pub fn add(&mut self, item: T) {
        debug!(kind = T::KIND, id = %item.id(), "add");
        self.ids.observe(item.id());
        self.items.push(item);
    }

    /// Assigns the next id to a new entity built from `form`, appends it and
    /// returns a reference to it.
    pub fn create(&mut self, form: T::Patch) -> &T {
        let id = self.next_id();
        self.add(T::from_patch(id, form));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Merges `patch` into the element whose id matches.
    ///
    /// Silently does nothing if no element matches.
    pub fn update(&mut self, id: &str, patch: T::Patch) {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                debug!(kind = T::KIND, id = %id, "update");
                item.apply_patch(patch);
            }
            None => debug!(kind = T::KIND, id = %id, "update matched nothing"),
        }
    }

    /// Removes the element whose id matches.
    ///
    /// Silently does nothing if no element matches.
    pub fn delete(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        debug!(
            kind = T::KIND,
            id = %id,
            removed = before - self.items.len(),
            "delete"
        );
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first `n` elements in insertion order.
    ///
    /// The dashboard labels these "recent", but nothing sorts them by time.
    pub fn preview(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }
}

impl<'a, T: Entity> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
