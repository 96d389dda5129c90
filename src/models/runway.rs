//! Runway slot model.
//!
//! Runways are not persistent objects: only the count of runways ever
//! created survives between reschedules. A `RunwaySlot` exists only
//! inside one rescheduling pass, inside the min-heap of uncommitted
//! capacity, and is discarded when the pass completes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Time;

/// A unit of runway capacity during one rescheduling pass.
///
/// Ordered by `(next_free, id)` ascending, so the pool's minimum is
/// always the earliest-free runway, ties broken by the lower identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwaySlot {
    /// Runway identifier, assigned sequentially from 1.
    pub id: i64,
    /// Earliest time this runway can accept another flight.
    pub next_free: Time,
}

impl RunwaySlot {
    /// Creates a slot free at the given time.
    pub fn new(id: i64, next_free: Time) -> Self {
        Self { id, next_free }
    }
}

impl Ord for RunwaySlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.next_free
            .cmp(&other.next_free)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for RunwaySlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
