//! Deterministic discrete-event runway scheduling.
//!
//! Consumes a strictly time-ordered sequence of operations — flight
//! submission, cancellation, re-prioritization, capacity expansion,
//! airline grounding, explicit time advancement — and maintains a
//! consistent allocation of flights to runways over simulated time.
//! A reference model for "priority + temporal fairness" resource
//! allocation, not a physical air-traffic simulator.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Flight`, `FlightState`, `PriorityKey`,
//!   `RunwaySlot`
//! - **`queue`**: Heap structures — arena-backed max pairing heap with
//!   updatable handles, generic binary min-heap
//! - **`scheduler`**: The engine — simulated-time advancement, the
//!   landing/promotion state machine, full-rebuild rescheduling, and the
//!   event records operations emit
//! - **`command`**: Textual adapter — parses `Name(arg, ...)` lines into
//!   validated engine calls
//!
//! # Determinism
//!
//! Every operation runs to completion before the next is accepted; the
//! clock only moves forward; ties are broken by the total order
//! `(priority desc, submit time asc, flight id asc)`. After any mutation
//! the entire schedule is re-derived from scratch, so observable output
//! is a pure function of the operation sequence.

pub mod command;
pub mod models;
pub mod queue;
pub mod scheduler;
