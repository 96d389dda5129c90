//! Scheduling domain models.
//!
//! Core data types for the runway allocation problem: the flight record
//! with its lifecycle state, the priority ordering key, and the transient
//! runway slot used while rebuilding a schedule.
//!
//! All quantities crossing the engine boundary are integers: identifiers,
//! timestamps, priorities, and durations. Times are ticks of the
//! simulated clock relative to session start (t=0).

mod flight;
mod runway;

pub use flight::{AirlineId, Flight, FlightId, FlightState, PriorityKey, Time};
pub use runway::RunwaySlot;
