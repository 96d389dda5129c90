//! Heap structures backing the engine.
//!
//! Two very different heaps serve two very different roles:
//!
//! - [`PairingHeap`]: a max-oriented mergeable heap with handle-based
//!   key updates and arbitrary-entry deletion, holding pending flights
//!   between reschedules. Arbitrary-node operations run in amortized
//!   logarithmic time without a rebuild.
//! - [`MinHeap`]: a plain binary min-heap used for the runway pool and
//!   the arrival timetable. Both instances are rebuilt from scratch on
//!   every reschedule, so no arbitrary-node operations are needed and an
//!   entire class of stale-entry bugs is eliminated.

mod binary;
mod pairing;

pub use binary::MinHeap;
pub use pairing::{Handle, PairingHeap};
