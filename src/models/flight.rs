//! Flight record and lifecycle model.
//!
//! A flight is the unit of work to be scheduled: it carries a priority,
//! a submission time, and an immutable duration, and moves through the
//! lifecycle `PENDING → SCHEDULED → INPROGRESS → LANDED`. Cancellation
//! and grounding delete the record outright rather than marking it, so
//! `LANDED` and removed flights never appear in the registry.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Caller-supplied flight identifier.
pub type FlightId = i64;
/// Airline identifier, used for range-grounding.
pub type AirlineId = i64;
/// Simulated clock value.
pub type Time = i64;

/// Lifecycle state of a flight.
///
/// `Pending` flights live in the priority queue and hold no assignment.
/// `Scheduled` and `InProgress` flights hold a runway, start time, and
/// ETA, and appear in the arrival timetable. A flight becomes `Landed`
/// exactly when its record leaves the registry, so the variant is only
/// observable in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightState {
    /// Waiting for runway capacity; no assignment.
    Pending,
    /// Assigned a runway but not yet started; may still be revised.
    Scheduled,
    /// Started; the assignment is a fixed commitment.
    InProgress,
    /// Completed. Terminal.
    Landed,
}

impl FlightState {
    /// Whether the flight has started (or finished) and is therefore
    /// immune to cancellation, grounding, and re-prioritization.
    pub fn has_departed(self) -> bool {
        matches!(self, FlightState::InProgress | FlightState::Landed)
    }
}

/// A flight record.
///
/// Owned exclusively by the registry; every other structure references it
/// by [`FlightId`] so removal can never leave a dangling link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier.
    pub id: FlightId,
    /// Owning airline.
    pub airline: AirlineId,
    /// Submission time; fixed at creation, breaks priority ties.
    pub submitted: Time,
    /// Scheduling priority (higher = more urgent). Mutable.
    pub priority: i64,
    /// Occupancy duration on the assigned runway. Immutable, positive.
    pub duration: i64,
    /// Lifecycle state.
    pub state: FlightState,
    /// Assigned runway; `None` while pending.
    pub runway: Option<i64>,
    /// Assigned start time; `None` while pending.
    pub start: Option<Time>,
    /// Estimated arrival (`start + duration`); `None` while pending.
    pub eta: Option<Time>,
}

impl Flight {
    /// Creates a new pending flight with no assignment.
    pub fn new(
        id: FlightId,
        airline: AirlineId,
        submitted: Time,
        priority: i64,
        duration: i64,
    ) -> Self {
        Self {
            id,
            airline,
            submitted,
            priority,
            duration,
            state: FlightState::Pending,
            runway: None,
            start: None,
            eta: None,
        }
    }

    /// The current priority-queue ordering key for this flight.
    ///
    /// Re-derived whenever the priority changes.
    pub fn priority_key(&self) -> PriorityKey {
        PriorityKey {
            priority: self.priority,
            submitted: self.submitted,
            flight_id: self.id,
        }
    }

    /// Clears the runway/start/ETA assignment and returns to pending.
    pub fn unassign(&mut self) {
        self.state = FlightState::Pending;
        self.runway = None;
        self.start = None;
        self.eta = None;
    }

    /// Records a confirmed runway assignment.
    pub fn assign(&mut self, runway: i64, start: Time) {
        self.state = FlightState::Scheduled;
        self.runway = Some(runway);
        self.start = Some(start);
        self.eta = Some(start + self.duration);
    }
}

/// Priority-queue ordering key: `(priority, -submitted, -flight_id)`,
/// compared lexicographically, larger wins.
///
/// Under a max-heap this yields: higher priority first, then earlier
/// submission, then lower flight id. The reversal of the last two fields
/// is expressed in `Ord` directly rather than by negating values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityKey {
    /// Scheduling priority, ascending significance.
    pub priority: i64,
    /// Submission time; earlier wins, so compared reversed.
    pub submitted: Time,
    /// Flight id; lower wins, so compared reversed.
    pub flight_id: FlightId,
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.submitted.cmp(&self.submitted))
            .then_with(|| other.flight_id.cmp(&self.flight_id))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
