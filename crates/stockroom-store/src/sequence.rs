//! # Id Sequences
//!
//! Hands out ids for newly created entities.
//!
//! ## Why Not "max id + 1"?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  max + 1 recomputed on every create:                                    │
//! │    ids [1, 2, 3] ── delete 3 ──► [1, 2] ── create ──► 3   (reused!)     │
//! │                                                                         │
//! │  Monotonic counter:                                                     │
//! │    next = 4      ── delete 3 ──► next = 4 ── create ──► 4               │
//! │                                                                         │
//! │  The counter only ever moves forward, so a deleted id is never          │
//! │  handed out again within the session.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric ids stay short and human-friendly for the tables on screen.
//! Component parts use opaque UUIDs instead; nothing displays them.

use tracing::warn;
use uuid::Uuid;

/// Id allocation strategy for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSequence {
    /// Decimal ids from a counter that never goes backwards.
    Counter { next: u64 },
    /// Random v4 UUIDs.
    Uuid,
}

impl IdSequence {
    /// A counter whose first id is `floor + 1`.
    pub const fn counter(floor: u64) -> Self {
        IdSequence::Counter {
            next: floor.saturating_add(1),
        }
    }

    pub const fn uuid() -> Self {
        IdSequence::Uuid
    }

    /// Allocates the next id.
    pub fn next_id(&mut self) -> String {
        match self {
            IdSequence::Counter { next } => {
                let id = *next;
                *next = next.saturating_add(1);
                id.to_string()
            }
            IdSequence::Uuid => Uuid::new_v4().to_string(),
        }
    }

    /// Moves the counter past an id that entered the collection by other
    /// means (seed data, caller-supplied ids). Non-numeric ids are ignored,
    /// and so is `u64::MAX`, which has no successor.
    pub fn observe(&mut self, id: &str) {
        if let IdSequence::Counter { next } = self {
            let Ok(n) = id.trim().parse::<u64>() else {
                return;
            };
            match n.checked_add(1) {
                Some(after) if after > *next => *next = after,
                Some(_) => {}
                None => warn!(id = n, "Id at the top of the counter range left unobserved"),
            }
        }
    }
}
