//! Event records emitted by engine operations.
//!
//! Every operation returns an ordered `Vec<Event>`; the engine itself
//! never touches an output sink. `Display` renders each event as one
//! human-readable line, and those lines are a compatibility surface:
//! existing session fixtures match them byte for byte, so the wording,
//! punctuation, and the `-1` sentinel for "not scheduled" are all fixed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{AirlineId, FlightId, Time};

/// One flight's ETA change from a rescheduling pass.
///
/// `eta` is the new arrival time, or `-1` when the flight lost its
/// assignment and returned to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaChange {
    /// Affected flight.
    pub flight: FlightId,
    /// New ETA, `-1` if unscheduled.
    pub eta: Time,
}

/// An engine-produced event notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Initial runway capacity came online.
    RunwaysAvailable { count: i64 },
    /// Additional runway capacity came online.
    RunwaysAdded { count: i64 },
    /// A runway count or capacity argument was non-positive.
    InvalidRunwayCount,
    /// A flight was accepted; `eta` is `-1` when no runway exists yet.
    FlightSubmitted { flight: FlightId, eta: Time },
    /// A submission reused a live flight identifier.
    DuplicateFlight,
    /// A flight completed its runway occupancy.
    Landed { flight: FlightId, eta: Time },
    /// Rescheduling changed previously confirmed ETAs.
    UpdatedEtas { changes: Vec<EtaChange> },
    /// Cancellation target does not exist.
    CancelUnknown { flight: FlightId },
    /// Cancellation target already departed.
    CancelDeparted { flight: FlightId },
    /// A flight was canceled and removed.
    Canceled { flight: FlightId },
    /// Re-prioritization target does not exist.
    ReprioritizeUnknown { flight: FlightId },
    /// Re-prioritization target already departed.
    ReprioritizeDeparted { flight: FlightId },
    /// A flight's priority was updated.
    PriorityUpdated { flight: FlightId, priority: i64 },
    /// A ground-hold range was inverted.
    InvalidAirlineRange,
    /// All non-departed flights of an airline range were removed.
    Grounded { low: AirlineId, high: AirlineId },
    /// Active-flight query found nothing.
    NoActiveFlights,
    /// One active-flight query line; `-1` fields while pending.
    ActiveFlight {
        flight: FlightId,
        airline: AirlineId,
        runway: i64,
        start: Time,
        eta: Time,
    },
    /// Schedule-window query found nothing.
    NoScheduledFlights,
    /// One schedule-window query line.
    ScheduledFlight { flight: FlightId },
    /// Session end.
    Terminated,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::RunwaysAvailable { count } => {
                write!(f, "{count} Runways are now available")
            }
            Event::RunwaysAdded { count } => {
                write!(f, "Additional {count} Runways are now available")
            }
            Event::InvalidRunwayCount => {
                write!(f, "Invalid input. Please provide a valid number of runways.")
            }
            Event::FlightSubmitted { flight, eta } => {
                write!(f, "Flight {flight} scheduled - ETA: {eta}")
            }
            Event::DuplicateFlight => write!(f, "Duplicate FlightID"),
            Event::Landed { flight, eta } => {
                write!(f, "Flight {flight} has landed at time {eta}")
            }
            Event::UpdatedEtas { changes } => {
                write!(f, "Updated ETAs: [")?;
                for (i, change) in changes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", change.flight, change.eta)?;
                }
                write!(f, "]")
            }
            Event::CancelUnknown { flight } => {
                write!(f, "Flight {flight} does not exist")
            }
            Event::CancelDeparted { flight } => {
                write!(f, "Cannot cancel. Flight {flight} has already departed")
            }
            Event::Canceled { flight } => {
                write!(f, "Flight {flight} has been canceled")
            }
            Event::ReprioritizeUnknown { flight } => {
                write!(f, "Flight {flight} not found")
            }
            Event::ReprioritizeDeparted { flight } => {
                write!(f, "Cannot reprioritize. Flight {flight} has already departed")
            }
            Event::PriorityUpdated { flight, priority } => {
                write!(
                    f,
                    "Priority of Flight {flight} has been updated to {priority}"
                )
            }
            Event::InvalidAirlineRange => {
                write!(f, "Invalid input. Please provide a valid airline range.")
            }
            Event::Grounded { low, high } => {
                write!(
                    f,
                    "Flights of the airlines in the range [{low}, {high}] have been grounded"
                )
            }
            Event::NoActiveFlights => write!(f, "No active flights"),
            Event::ActiveFlight {
                flight,
                airline,
                runway,
                start,
                eta,
            } => {
                write!(
                    f,
                    "[flight{flight}, airline{airline}, runway{runway}, start{start}, ETA{eta}]"
                )
            }
            Event::NoScheduledFlights => {
                write!(f, "There are no flights in that time period")
            }
            Event::ScheduledFlight { flight } => write!(f, "[{flight}]"),
            Event::Terminated => write!(f, "Program Terminated!!"),
        }
    }
}
