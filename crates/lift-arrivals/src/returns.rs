//! `ReturnQueue` — scheduled return trips, ordered by due time.
//!
//! When a passenger spawns, their return trip (destination back to the
//! lobby) is scheduled immediately with a due time of spawn + planned stay.
//! The passenger controller drains everything due at the top of each tick
//! and submits the actual calls then, so call ids still reflect submission
//! order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lift_core::{FloorId, PersonId, PersonType};

/// A return trip waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledReturn {
    /// Sim-seconds at which the return call becomes due.
    pub due_secs:    f64,
    pub person:      PersonId,
    pub person_type: PersonType,
    /// Floor the passenger is returning from.
    pub origin:      FloorId,
    /// Floor the passenger is returning to (normally the lobby).
    pub destination: FloorId,
}

impl Eq for ScheduledReturn {}

impl Ord for ScheduledReturn {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by due time; equal times ordered by person id for
        // determinism.  due_secs is never NaN, so total_cmp is a total order.
        other
            .due_secs
            .total_cmp(&self.due_secs)
            .then_with(|| other.person.cmp(&self.person))
    }
}

impl PartialOrd for ScheduledReturn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of scheduled returns keyed by due time.
#[derive(Default)]
pub struct ReturnQueue {
    heap: BinaryHeap<ScheduledReturn>,
}

impl ReturnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a return trip.
    pub fn push(&mut self, entry: ScheduledReturn) {
        self.heap.push(entry);
    }

    /// Remove and return the earliest entry if it is due at or before `now`.
    ///
    /// Call in a loop to drain everything due this tick.
    pub fn pop_due(&mut self, now_secs: f64) -> Option<ScheduledReturn> {
        if self.heap.peek()?.due_secs <= now_secs {
            self.heap.pop()
        } else {
            None
        }
    }

    /// Due time of the earliest entry without popping it.
    pub fn next_due(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.due_secs)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
