//! Discrete-event scheduling engine.
//!
//! # Algorithm
//!
//! Every mutating operation follows the same control flow:
//!
//! 1. Advance simulated time to the operation's timestamp, landing
//!    flights whose ETA has passed and promoting started flights from
//!    SCHEDULED to INPROGRESS.
//! 2. Apply the operation's own mutation to the registry, airline index,
//!    and priority queue.
//! 3. Re-derive the entire schedule for every non-terminal flight from
//!    the current snapshot of INPROGRESS commitments.
//! 4. Emit operation-specific and schedule-change events, in a fixed
//!    order.
//!
//! The full rebuild in step 3 is deliberate: it is simpler and provably
//! correct at `O(k log k)` per mutation (k = unfixed flights), and
//! incremental maintenance would subtly change observable tie-break
//! behavior. INPROGRESS and LANDED flights are excluded, so the rebuilt
//! side never grows past the live workload.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::command::Command;
use crate::models::{AirlineId, Flight, FlightId, FlightState, PriorityKey, RunwaySlot, Time};
use crate::queue::{Handle, MinHeap, PairingHeap};

use super::events::{EtaChange, Event};

/// The scheduling engine: one instance per session, owning all state.
///
/// Single-threaded and synchronous; every operation runs to completion
/// and returns its ordered event notifications. The caller owns
/// rendering and persistence.
#[derive(Debug, Default)]
pub struct RunwayScheduler {
    /// Simulated clock; monotonically non-decreasing.
    clock: Time,
    /// Total runways ever created. Capacity only grows.
    runway_total: i64,
    /// Authoritative flight store, sorted by id for the active query.
    registry: BTreeMap<FlightId, Flight>,
    /// Airline id → its live flights, for range-grounding.
    airline_index: BTreeMap<AirlineId, BTreeSet<FlightId>>,
    /// Pending flights, max-ordered by priority key.
    pending: PairingHeap<PriorityKey, FlightId>,
    /// Flight id → its live pending-queue handle.
    handles: HashMap<FlightId, Handle>,
    /// Uncommitted runway capacity; rebuilt every reschedule.
    pool: MinHeap<RunwaySlot>,
    /// `(eta, flight)` of scheduled/in-progress flights; rebuilt every
    /// reschedule, so entries are hints, not authority.
    timetable: MinHeap<(Time, FlightId)>,
}

impl RunwayScheduler {
    /// Creates an engine with no runways and an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub fn clock(&self) -> Time {
        self.clock
    }

    /// Total runway capacity created so far.
    pub fn runway_count(&self) -> i64 {
        self.runway_total
    }

    /// Looks up a live flight record.
    pub fn flight(&self, id: FlightId) -> Option<&Flight> {
        self.registry.get(&id)
    }

    /// All live flight records, ascending by id.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.registry.values()
    }

    /// Dispatches a parsed command to the matching operation.
    pub fn apply(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::Initialize { runways } => self.initialize(runways),
            Command::SubmitFlight {
                flight,
                airline,
                submitted,
                priority,
                duration,
            } => self.submit_flight(flight, airline, submitted, priority, duration),
            Command::CancelFlight { flight, at } => self.cancel_flight(flight, at),
            Command::Reprioritize {
                flight,
                at,
                priority,
            } => self.reprioritize(flight, at, priority),
            Command::AddRunways { count, at } => self.add_runways(count, at),
            Command::GroundHold { low, high, at } => self.ground_hold(low, high, at),
            Command::Tick { at } => self.tick(at),
            Command::PrintActive => self.print_active(),
            Command::PrintSchedule { from, to } => self.print_schedule(from, to),
            Command::Quit => self.quit(),
        }
    }

    /// Brings the initial runway capacity online and resets the clock.
    ///
    /// Rejects non-positive counts. Does not reschedule.
    pub fn initialize(&mut self, runways: i64) -> Vec<Event> {
        if runways <= 0 {
            return vec![Event::InvalidRunwayCount];
        }
        self.clock = 0;
        self.runway_total = runways;
        debug!(runways, "session initialized");
        vec![Event::RunwaysAvailable { count: runways }]
    }

    /// Submits a new flight for scheduling.
    pub fn submit_flight(
        &mut self,
        flight: FlightId,
        airline: AirlineId,
        submitted: Time,
        priority: i64,
        duration: i64,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(submitted, &mut events);

        if self.registry.contains_key(&flight) {
            events.push(Event::DuplicateFlight);
            return events;
        }

        let record = Flight::new(flight, airline, submitted, priority, duration);
        let key = record.priority_key();
        self.registry.insert(flight, record);
        self.airline_index.entry(airline).or_default().insert(flight);
        let handle = self.pending.push(key, flight);
        self.handles.insert(flight, handle);
        debug!(flight, airline, priority, duration, "flight submitted");

        let changes = self.reschedule();
        let eta = self
            .registry
            .get(&flight)
            .and_then(|f| f.eta)
            .unwrap_or(-1);
        events.push(Event::FlightSubmitted { flight, eta });
        Self::push_changes(&mut events, changes);
        events
    }

    /// Cancels a flight that has not yet departed.
    pub fn cancel_flight(&mut self, flight: FlightId, at: Time) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(at, &mut events);

        match self.registry.get(&flight) {
            None => {
                events.push(Event::CancelUnknown { flight });
                return events;
            }
            Some(record) if record.state.has_departed() => {
                events.push(Event::CancelDeparted { flight });
                return events;
            }
            Some(_) => {}
        }

        self.remove_from_indices(flight);
        self.registry.remove(&flight);
        debug!(flight, "flight canceled");
        events.push(Event::Canceled { flight });

        let changes = self.reschedule();
        Self::push_changes(&mut events, changes);
        events
    }

    /// Changes the priority of a flight that has not yet departed.
    pub fn reprioritize(&mut self, flight: FlightId, at: Time, priority: i64) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(at, &mut events);

        let record = match self.registry.get_mut(&flight) {
            None => {
                events.push(Event::ReprioritizeUnknown { flight });
                return events;
            }
            Some(record) if record.state.has_departed() => {
                events.push(Event::ReprioritizeDeparted { flight });
                return events;
            }
            Some(record) => record,
        };

        record.priority = priority;
        let new_key = record.priority_key();
        if record.state == FlightState::Pending {
            if let Some(&handle) = self.handles.get(&flight) {
                self.pending.update_key(handle, new_key);
            }
        }
        debug!(flight, priority, "priority updated");
        events.push(Event::PriorityUpdated { flight, priority });

        let changes = self.reschedule();
        Self::push_changes(&mut events, changes);
        events
    }

    /// Brings additional runway capacity online.
    pub fn add_runways(&mut self, count: i64, at: Time) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(at, &mut events);

        if count <= 0 {
            events.push(Event::InvalidRunwayCount);
            return events;
        }

        self.runway_total += count;
        debug!(count, total = self.runway_total, "runways added");
        events.push(Event::RunwaysAdded { count });

        let changes = self.reschedule();
        Self::push_changes(&mut events, changes);
        events
    }

    /// Removes every non-departed flight of the airlines in
    /// `[low, high]`.
    pub fn ground_hold(&mut self, low: AirlineId, high: AirlineId, at: Time) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(at, &mut events);

        if high < low {
            events.push(Event::InvalidAirlineRange);
            return events;
        }

        let doomed: Vec<FlightId> = self
            .airline_index
            .range(low..=high)
            .flat_map(|(_, flights)| flights.iter().copied())
            .filter(|id| {
                self.registry
                    .get(id)
                    .is_some_and(|f| !f.state.has_departed())
            })
            .collect();

        for flight in doomed {
            self.remove_from_indices(flight);
            self.registry.remove(&flight);
        }
        debug!(low, high, "airline range grounded");
        events.push(Event::Grounded { low, high });

        let changes = self.reschedule();
        Self::push_changes(&mut events, changes);
        events
    }

    /// Advances time with no other mutation.
    pub fn tick(&mut self, at: Time) -> Vec<Event> {
        let mut events = Vec::new();
        self.advance_time(at, &mut events);
        events
    }

    /// Lists every live flight ascending by id. Pure query.
    pub fn print_active(&self) -> Vec<Event> {
        if self.registry.is_empty() {
            return vec![Event::NoActiveFlights];
        }
        self.registry
            .values()
            .map(|f| Event::ActiveFlight {
                flight: f.id,
                airline: f.airline,
                runway: f.runway.unwrap_or(-1),
                start: f.start.unwrap_or(-1),
                eta: f.eta.unwrap_or(-1),
            })
            .collect()
    }

    /// Lists scheduled, not-yet-started flights whose ETA falls within
    /// `[from, to]`, ordered by `(eta, id)`. Pure query.
    pub fn print_schedule(&self, from: Time, to: Time) -> Vec<Event> {
        let mut matches: Vec<(Time, FlightId)> = self
            .registry
            .values()
            .filter(|f| f.state == FlightState::Scheduled)
            .filter(|f| f.start.is_some_and(|s| s > self.clock))
            .filter(|f| f.eta.is_some_and(|eta| from <= eta && eta <= to))
            .map(|f| (f.eta.unwrap_or(-1), f.id))
            .collect();
        matches.sort_unstable();

        if matches.is_empty() {
            return vec![Event::NoScheduledFlights];
        }
        matches
            .into_iter()
            .map(|(_, flight)| Event::ScheduledFlight { flight })
            .collect()
    }

    /// Ends the session.
    pub fn quit(&self) -> Vec<Event> {
        vec![Event::Terminated]
    }

    /// Advances the clock to `at`, landing and promoting flights.
    ///
    /// A strictly earlier timestamp is ignored outright. An equal
    /// timestamp performs no landings but still runs the promotion pass
    /// and a reschedule: a flight scheduled to start *now* becomes a
    /// fixed commitment before the next same-tick operation is placed.
    fn advance_time(&mut self, at: Time, events: &mut Vec<Event>) {
        if at < self.clock {
            return;
        }

        if at > self.clock {
            self.clock = at;

            let mut landed: Vec<(Time, FlightId)> = Vec::new();
            loop {
                let Some(&(eta, flight)) = self.timetable.peek() else {
                    break;
                };
                if eta > self.clock {
                    break;
                }
                self.timetable.pop();

                // Stale entries (flight gone or already landed through
                // another path) are hints to discard, not errors.
                let Some(record) = self.registry.get_mut(&flight) else {
                    continue;
                };
                if record.state == FlightState::Landed {
                    continue;
                }
                record.state = FlightState::Landed;
                landed.push((eta, flight));
                self.remove_from_indices(flight);
                self.registry.remove(&flight);
            }

            // Pop order already matches, but same-tick duplicates from
            // repeated insertions must not reorder the report.
            landed.sort_unstable();
            if !landed.is_empty() {
                debug!(count = landed.len(), clock = self.clock, "flights landed");
            }
            for (eta, flight) in landed {
                events.push(Event::Landed { flight, eta });
            }
        }

        for record in self.registry.values_mut() {
            if record.state == FlightState::Scheduled
                && record.start.is_some_and(|start| start <= self.clock)
            {
                record.state = FlightState::InProgress;
            }
        }

        let changes = self.reschedule();
        Self::push_changes(events, changes);
    }

    /// Re-derives the entire schedule for every pending and scheduled
    /// flight from the current INPROGRESS commitments.
    ///
    /// Returns the changed-ETA report: previously scheduled flights whose
    /// ETA differs (new value) or which lost their slot (`-1`), sorted by
    /// flight id.
    fn reschedule(&mut self) -> Vec<EtaChange> {
        let mut previous_etas: HashMap<FlightId, Time> = HashMap::new();
        let mut candidates: Vec<FlightId> = Vec::new();

        // Scheduled assignments are stale guesses until reconfirmed.
        for record in self.registry.values_mut() {
            if record.state == FlightState::Scheduled {
                if let Some(eta) = record.eta {
                    previous_etas.insert(record.id, eta);
                }
                record.state = FlightState::Pending;
                candidates.push(record.id);
            }
        }

        while let Some(flight) = self.pending.pop() {
            self.handles.remove(&flight);
            if self
                .registry
                .get(&flight)
                .is_some_and(|f| f.state == FlightState::Pending)
            {
                candidates.push(flight);
            }
        }

        // Rebuild the runway pool and timetable from scratch: only the
        // runway count and INPROGRESS occupancy survive a reschedule.
        self.pool.clear();
        self.timetable.clear();
        let mut busy_until: HashMap<i64, Time> = HashMap::new();
        for record in self.registry.values() {
            if record.state == FlightState::InProgress {
                if let (Some(runway), Some(eta)) = (record.runway, record.eta) {
                    let slot = busy_until.entry(runway).or_insert(0);
                    if eta > *slot {
                        *slot = eta;
                    }
                    self.timetable.push((eta, record.id));
                }
            }
        }
        for runway in 1..=self.runway_total {
            let free = busy_until
                .get(&runway)
                .copied()
                .unwrap_or(0)
                .max(self.clock);
            self.pool.push(RunwaySlot::new(runway, free));
        }

        // Highest priority key first; the key is a total order, so this
        // equals repeated extract-max.
        candidates.sort_unstable_by_key(|id| Reverse(self.registry[id].priority_key()));

        self.pending.clear();
        self.handles.clear();
        let mut new_etas: HashMap<FlightId, Time> = HashMap::new();

        if self.pool.is_empty() {
            for flight in candidates {
                let Some(record) = self.registry.get_mut(&flight) else {
                    continue;
                };
                record.unassign();
                let handle = self.pending.push(record.priority_key(), flight);
                self.handles.insert(flight, handle);
            }
        } else {
            for flight in candidates {
                let Some(slot) = self.pool.pop() else {
                    break;
                };
                let Some(record) = self.registry.get_mut(&flight) else {
                    self.pool.push(slot);
                    continue;
                };
                let start = self.clock.max(slot.next_free);
                record.assign(slot.id, start);
                let eta = start + record.duration;
                new_etas.insert(flight, eta);
                self.pool.push(RunwaySlot::new(slot.id, eta));
                self.timetable.push((eta, flight));
            }
        }

        let mut changes: Vec<EtaChange> = Vec::new();
        for (&flight, &eta) in &new_etas {
            if previous_etas.get(&flight).is_some_and(|&old| old != eta) {
                changes.push(EtaChange { flight, eta });
            }
        }
        for &flight in previous_etas.keys() {
            if !new_etas.contains_key(&flight) {
                changes.push(EtaChange { flight, eta: -1 });
            }
        }
        changes.sort_unstable_by_key(|c| c.flight);
        changes
    }

    /// Drops a flight from the airline index and the pending queue.
    /// Deleting an already-gone queue entry is an expected no-op.
    fn remove_from_indices(&mut self, flight: FlightId) {
        if let Some(record) = self.registry.get(&flight) {
            let airline = record.airline;
            if let Some(set) = self.airline_index.get_mut(&airline) {
                set.remove(&flight);
                if set.is_empty() {
                    self.airline_index.remove(&airline);
                }
            }
        }
        if let Some(handle) = self.handles.remove(&flight) {
            self.pending.remove(handle);
        }
    }

    fn push_changes(events: &mut Vec<Event>, changes: Vec<EtaChange>) {
        if !changes.is_empty() {
            events.push(Event::UpdatedEtas { changes });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(events: &[Event]) -> Vec<String> {
        events.iter().map(|e| e.to_string()).collect()
    }

    fn engine_with_runways(runways: i64) -> RunwayScheduler {
        let mut engine = RunwayScheduler::new();
        engine.initialize(runways);
        engine
    }

    #[test]
    fn test_initialize_rejects_non_positive() {
        let mut engine = RunwayScheduler::new();
        assert_eq!(engine.initialize(0), vec![Event::InvalidRunwayCount]);
        assert_eq!(engine.initialize(-3), vec![Event::InvalidRunwayCount]);
        assert_eq!(engine.runway_count(), 0);
        assert_eq!(
            engine.initialize(2),
            vec![Event::RunwaysAvailable { count: 2 }]
        );
        assert_eq!(engine.runway_count(), 2);
    }

    #[test]
    fn test_two_runways_place_equal_flights_in_parallel() {
        let mut engine = engine_with_runways(2);

        let events = engine.submit_flight(1, 100, 0, 5, 10);
        assert_eq!(lines(&events), ["Flight 1 scheduled - ETA: 10"]);
        let f1 = engine.flight(1).unwrap();
        assert_eq!((f1.runway, f1.start, f1.eta), (Some(1), Some(0), Some(10)));

        let events = engine.submit_flight(2, 100, 0, 5, 10);
        assert_eq!(lines(&events), ["Flight 2 scheduled - ETA: 10"]);
        let f2 = engine.flight(2).unwrap();
        assert_eq!((f2.runway, f2.start, f2.eta), (Some(2), Some(0), Some(10)));
    }

    #[test]
    fn test_single_runway_serializes_equal_flights_by_id() {
        let mut engine = engine_with_runways(1);

        engine.submit_flight(1, 100, 0, 5, 10);
        let events = engine.submit_flight(2, 100, 0, 5, 10);
        assert_eq!(lines(&events), ["Flight 2 scheduled - ETA: 20"]);

        // The first same-tick flight is already a fixed commitment.
        assert_eq!(engine.flight(1).unwrap().state, FlightState::InProgress);
        let f2 = engine.flight(2).unwrap();
        assert_eq!((f2.start, f2.eta), (Some(10), Some(20)));
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        let events = engine.submit_flight(1, 200, 0, 9, 4);
        assert_eq!(lines(&events), ["Duplicate FlightID"]);
        assert_eq!(engine.flight(1).unwrap().airline, 100);
    }

    #[test]
    fn test_submission_without_runways_stays_pending() {
        let mut engine = RunwayScheduler::new();
        let events = engine.submit_flight(1, 100, 0, 5, 10);
        assert_eq!(lines(&events), ["Flight 1 scheduled - ETA: -1"]);
        let f1 = engine.flight(1).unwrap();
        assert_eq!(f1.state, FlightState::Pending);
        assert_eq!(f1.eta, None);
    }

    #[test]
    fn test_higher_priority_preempts_scheduled_flight() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10); // becomes INPROGRESS
        engine.submit_flight(2, 100, 0, 5, 10); // scheduled at 10

        let events = engine.submit_flight(3, 100, 0, 10, 10);
        assert_eq!(
            lines(&events),
            ["Flight 3 scheduled - ETA: 20", "Updated ETAs: [2: 30]"]
        );
        assert_eq!(engine.flight(3).unwrap().start, Some(10));
        assert_eq!(engine.flight(2).unwrap().start, Some(20));
    }

    #[test]
    fn test_tick_lands_flights_in_eta_id_order() {
        let mut engine = engine_with_runways(2);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10);

        let events = engine.tick(12);
        assert_eq!(
            lines(&events),
            [
                "Flight 1 has landed at time 10",
                "Flight 2 has landed at time 10"
            ]
        );
        assert_eq!(engine.flights().count(), 0);
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10);

        let first = engine.tick(15);
        assert!(!first.is_empty());
        let second = engine.tick(15);
        assert_eq!(second, Vec::new());
    }

    #[test]
    fn test_earlier_timestamp_does_not_rewind() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.tick(8);
        assert_eq!(engine.clock(), 8);

        // Timestamp in the past: clock holds, flight is untouched.
        let events = engine.tick(3);
        assert_eq!(events, Vec::new());
        assert_eq!(engine.clock(), 8);
        assert!(engine.flight(1).is_some());
    }

    #[test]
    fn test_cancel_unknown_and_departed() {
        let mut engine = engine_with_runways(1);
        let events = engine.cancel_flight(9, 0);
        assert_eq!(lines(&events), ["Flight 9 does not exist"]);

        engine.submit_flight(1, 100, 0, 5, 10);
        engine.tick(5); // promotes flight 1
        let events = engine.cancel_flight(1, 5);
        assert_eq!(
            lines(&events),
            ["Cannot cancel. Flight 1 has already departed"]
        );
        assert!(engine.flight(1).is_some());
    }

    #[test]
    fn test_cancel_scheduled_flight_frees_its_slot() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10); // eta 20
        engine.submit_flight(3, 100, 0, 1, 10); // eta 30

        let events = engine.cancel_flight(2, 0);
        assert_eq!(
            lines(&events),
            ["Flight 2 has been canceled", "Updated ETAs: [3: 20]"]
        );
        assert!(engine.flight(2).is_none());
    }

    #[test]
    fn test_cancel_pending_flight_changes_nothing_else() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 9, 10);
        engine.submit_flight(2, 100, 0, 5, 10);
        // No runway pressure from flight 3 onward; canceling it must not
        // disturb the others.
        let mut engine_no_runways = RunwayScheduler::new();
        engine_no_runways.submit_flight(1, 100, 0, 9, 10);
        engine_no_runways.submit_flight(2, 100, 0, 5, 10);
        let events = engine_no_runways.cancel_flight(2, 0);
        assert_eq!(lines(&events), ["Flight 2 has been canceled"]);

        let events = engine.cancel_flight(2, 0);
        assert_eq!(lines(&events), ["Flight 2 has been canceled"]);
        assert_eq!(engine.flight(1).unwrap().eta, Some(10));
    }

    #[test]
    fn test_reprioritize_pending_flight_reorders_queue() {
        let mut engine = RunwayScheduler::new(); // zero runways: all pending
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10);

        let events = engine.reprioritize(2, 0, 50);
        assert_eq!(
            lines(&events),
            ["Priority of Flight 2 has been updated to 50"]
        );

        // Capacity arrives: flight 2 must now be placed first.
        engine.add_runways(1, 0);
        assert_eq!(engine.flight(2).unwrap().start, Some(0));
        assert_eq!(engine.flight(1).unwrap().start, Some(10));
    }

    #[test]
    fn test_reprioritize_in_progress_rejected() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.tick(2); // flight 1 is INPROGRESS
        let before = engine.flight(1).unwrap().clone();

        let events = engine.reprioritize(1, 2, 99);
        assert_eq!(
            lines(&events),
            ["Cannot reprioritize. Flight 1 has already departed"]
        );
        let after = engine.flight(1).unwrap();
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.eta, before.eta);
    }

    #[test]
    fn test_reprioritize_unknown() {
        let mut engine = engine_with_runways(1);
        let events = engine.reprioritize(4, 0, 10);
        assert_eq!(lines(&events), ["Flight 4 not found"]);
    }

    #[test]
    fn test_add_runways_relieves_pressure() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10); // queued behind: eta 20

        let events = engine.add_runways(1, 0);
        assert_eq!(
            lines(&events),
            [
                "Additional 1 Runways are now available",
                "Updated ETAs: [2: 10]"
            ]
        );
        assert_eq!(engine.flight(2).unwrap().runway, Some(2));
        assert_eq!(engine.runway_count(), 2);
    }

    #[test]
    fn test_add_runways_rejects_non_positive() {
        let mut engine = engine_with_runways(1);
        let events = engine.add_runways(0, 0);
        assert_eq!(
            lines(&events),
            ["Invalid input. Please provide a valid number of runways."]
        );
        assert_eq!(engine.runway_count(), 1);
    }

    #[test]
    fn test_runway_count_is_monotone() {
        let mut engine = engine_with_runways(2);
        let mut seen = vec![engine.runway_count()];
        engine.add_runways(3, 0);
        seen.push(engine.runway_count());
        engine.add_runways(-1, 0);
        seen.push(engine.runway_count());
        engine.add_runways(1, 5);
        seen.push(engine.runway_count());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ground_hold_removes_range_but_not_departed() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10); // airline in range, departs
        engine.tick(1); // promote flight 1
        engine.submit_flight(2, 150, 1, 5, 10); // start 10, eta 20
        engine.submit_flight(3, 300, 1, 5, 10); // start 20, eta 30

        let events = engine.ground_hold(100, 200, 1);
        assert_eq!(
            lines(&events),
            [
                "Flights of the airlines in the range [100, 200] have been grounded",
                "Updated ETAs: [3: 20]"
            ]
        );
        assert!(engine.flight(1).is_some(), "departed flight untouched");
        assert!(engine.flight(2).is_none());
        assert!(engine.flight(3).is_some(), "airline 300 outside range");
    }

    #[test]
    fn test_ground_hold_rejects_inverted_range() {
        let mut engine = engine_with_runways(1);
        let events = engine.ground_hold(200, 100, 0);
        assert_eq!(
            lines(&events),
            ["Invalid input. Please provide a valid airline range."]
        );
    }

    #[test]
    fn test_ground_hold_frees_capacity_for_survivors() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 9, 10); // INPROGRESS after next op
        engine.submit_flight(2, 100, 0, 5, 10); // eta 20
        engine.submit_flight(3, 300, 0, 1, 10); // eta 30

        let events = engine.ground_hold(100, 100, 0);
        assert_eq!(
            lines(&events),
            [
                "Flights of the airlines in the range [100, 100] have been grounded",
                "Updated ETAs: [3: 20]"
            ]
        );
    }

    #[test]
    fn test_print_active_matches_registry() {
        let mut engine = engine_with_runways(1);
        assert_eq!(lines(&engine.print_active()), ["No active flights"]);

        engine.submit_flight(2, 100, 0, 5, 10);
        engine.submit_flight(1, 200, 0, 5, 10);
        let listed: Vec<String> = lines(&engine.print_active());
        assert_eq!(
            listed,
            [
                "[flight1, airline200, runway1, start10, ETA20]".to_string(),
                "[flight2, airline100, runway1, start0, ETA10]".to_string(),
            ]
            .to_vec()
        );

        // Round trip: every listed id is a registry id and vice versa.
        let ids: Vec<FlightId> = engine.flights().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_print_active_pending_fields_are_sentinels() {
        let mut engine = RunwayScheduler::new(); // zero runways
        engine.submit_flight(7, 300, 0, 5, 10);
        assert_eq!(
            lines(&engine.print_active()),
            ["[flight7, airline300, runway-1, start-1, ETA-1]"]
        );
    }

    #[test]
    fn test_print_schedule_window() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 9, 10); // INPROGRESS after next op
        engine.submit_flight(2, 100, 0, 5, 10); // start 10, eta 20
        engine.submit_flight(3, 100, 0, 1, 10); // start 20, eta 30

        // Flight 1 has started; flights 2 and 3 are future departures.
        assert_eq!(lines(&engine.print_schedule(0, 25)), ["[2]"]);
        assert_eq!(lines(&engine.print_schedule(20, 30)), ["[2]", "[3]"]);
        assert_eq!(
            lines(&engine.print_schedule(31, 99)),
            ["There are no flights in that time period"]
        );
    }

    #[test]
    fn test_no_overlapping_occupancy_per_runway() {
        let mut engine = engine_with_runways(2);
        for (id, priority, duration) in
            [(1, 5, 7), (2, 9, 3), (3, 1, 12), (4, 9, 5), (5, 4, 2)]
        {
            engine.submit_flight(id, 100 + id, 0, priority, duration);
        }
        engine.tick(4);
        engine.submit_flight(6, 300, 4, 8, 6);

        let mut intervals: Vec<(i64, Time, Time)> = engine
            .flights()
            .filter(|f| !matches!(f.state, FlightState::Pending))
            .map(|f| (f.runway.unwrap(), f.start.unwrap(), f.eta.unwrap()))
            .collect();
        intervals.sort_unstable();
        for pair in intervals.windows(2) {
            let (r1, _, end1) = pair[0];
            let (r2, start2, _) = pair[1];
            if r1 == r2 {
                assert!(end1 <= start2, "overlap on runway {r1}");
            }
        }
    }

    #[test]
    fn test_registry_tracks_submissions_and_removals() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);
        engine.submit_flight(2, 100, 0, 5, 10);
        engine.submit_flight(3, 200, 0, 5, 10);
        engine.cancel_flight(3, 0);
        engine.tick(11); // lands flight 1

        let ids: Vec<FlightId> = engine.flights().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_landing_mid_submit_reports_before_placement() {
        let mut engine = engine_with_runways(1);
        engine.submit_flight(1, 100, 0, 5, 10);

        let events = engine.submit_flight(2, 100, 12, 5, 10);
        assert_eq!(
            lines(&events),
            [
                "Flight 1 has landed at time 10",
                "Flight 2 scheduled - ETA: 22"
            ]
        );
    }

    #[test]
    fn test_full_session_transcript() {
        let mut engine = RunwayScheduler::new();
        let script: Vec<(Command, Vec<&str>)> = vec![
            (
                Command::Initialize { runways: 1 },
                vec!["1 Runways are now available"],
            ),
            (
                Command::SubmitFlight {
                    flight: 1,
                    airline: 100,
                    submitted: 0,
                    priority: 5,
                    duration: 10,
                },
                vec!["Flight 1 scheduled - ETA: 10"],
            ),
            (
                Command::SubmitFlight {
                    flight: 2,
                    airline: 100,
                    submitted: 0,
                    priority: 5,
                    duration: 10,
                },
                vec!["Flight 2 scheduled - ETA: 20"],
            ),
            (
                Command::SubmitFlight {
                    flight: 3,
                    airline: 200,
                    submitted: 0,
                    priority: 10,
                    duration: 10,
                },
                vec!["Flight 3 scheduled - ETA: 20", "Updated ETAs: [2: 30]"],
            ),
            (
                Command::PrintActive,
                vec![
                    "[flight1, airline100, runway1, start0, ETA10]",
                    "[flight2, airline100, runway1, start20, ETA30]",
                    "[flight3, airline200, runway1, start10, ETA20]",
                ],
            ),
            (
                Command::AddRunways { count: 1, at: 0 },
                vec![
                    "Additional 1 Runways are now available",
                    "Updated ETAs: [2: 20, 3: 10]",
                ],
            ),
            (
                Command::CancelFlight { flight: 1, at: 0 },
                vec!["Cannot cancel. Flight 1 has already departed"],
            ),
            (
                Command::GroundHold {
                    low: 200,
                    high: 250,
                    at: 0,
                },
                vec!["Flights of the airlines in the range [200, 250] have been grounded"],
            ),
            (
                Command::Tick { at: 25 },
                vec![
                    "Flight 1 has landed at time 10",
                    "Flight 3 has landed at time 10",
                    "Flight 2 has landed at time 20",
                ],
            ),
            (Command::PrintActive, vec!["No active flights"]),
            (Command::Quit, vec!["Program Terminated!!"]),
        ];

        for (command, expected) in script {
            let events = engine.apply(command.clone());
            assert_eq!(lines(&events), expected, "command: {command:?}");
        }
    }
}
