//! The scheduling engine.
//!
//! Orchestrates the registries, indices, and heaps: advances simulated
//! time, lands and promotes flights, applies each operation's mutation,
//! and re-derives the entire schedule for every non-terminal flight after
//! every change.

mod engine;
mod events;

pub use engine::RunwayScheduler;
pub use events::{EtaChange, Event};
