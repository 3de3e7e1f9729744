//! One floor: two FIFO call queues, occupant count, observed maxima.

use std::collections::VecDeque;

use lift_core::{Direction, FloorId, PersonId};

/// A single floor of the building.
///
/// The two queues hold passengers waiting for an up or down car, in strict
/// arrival order.  A passenger appears in a given queue at most once; the
/// controllers enforce this, and the store backs it with a debug assertion.
///
/// `occupants` counts people currently staying on the floor (between a
/// dropoff and their scheduled return) — passengers standing in a queue are
/// not occupants.
#[derive(Debug, Clone)]
pub struct Floor {
    id: FloorId,
    up_queue:   VecDeque<PersonId>,
    down_queue: VecDeque<PersonId>,
    occupants:  usize,
    /// Longest up-queue observed over the run so far.
    max_up_seen:   usize,
    /// Longest down-queue observed over the run so far.
    max_down_seen: usize,
}

impl Floor {
    pub(crate) fn new(id: FloorId) -> Self {
        Self {
            id,
            up_queue:      VecDeque::new(),
            down_queue:    VecDeque::new(),
            occupants:     0,
            max_up_seen:   0,
            max_down_seen: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> FloorId {
        self.id
    }

    // ── Queues ────────────────────────────────────────────────────────────

    /// Append `person` to the queue for `direction`.  Returns the new queue
    /// length (published as the queue-size-changed payload).
    ///
    /// # Panics
    /// Panics in debug mode on a duplicate enqueue or `Direction::Idle`.
    pub fn enqueue(&mut self, direction: Direction, person: PersonId) -> usize {
        let queue = self.queue_mut(direction);
        debug_assert!(
            !queue.contains(&person),
            "person {person} enqueued twice in the same direction"
        );
        queue.push_back(person);
        let len = queue.len();
        match direction {
            Direction::Up   => self.max_up_seen = self.max_up_seen.max(len),
            Direction::Down => self.max_down_seen = self.max_down_seen.max(len),
            Direction::Idle => {}
        }
        len
    }

    /// Pop the head of the queue for `direction`.
    ///
    /// Returns `None` when the queue is empty — the defensive branch the
    /// batch-boarding path relies on to survive accounting drift.
    pub fn dequeue(&mut self, direction: Direction) -> Option<PersonId> {
        self.queue_mut(direction).pop_front()
    }

    #[inline]
    pub fn waiting_up(&self) -> usize {
        self.up_queue.len()
    }

    #[inline]
    pub fn waiting_down(&self) -> usize {
        self.down_queue.len()
    }

    /// Queue length in `direction` (0 for `Idle`).
    pub fn waiting(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up   => self.up_queue.len(),
            Direction::Down => self.down_queue.len(),
            Direction::Idle => 0,
        }
    }

    // ── Occupants ─────────────────────────────────────────────────────────

    #[inline]
    pub fn occupants(&self) -> usize {
        self.occupants
    }

    pub fn add_occupant(&mut self) {
        self.occupants += 1;
    }

    pub fn remove_occupant(&mut self) {
        debug_assert!(self.occupants > 0, "occupant count underflow on floor {}", self.id);
        self.occupants = self.occupants.saturating_sub(1);
    }

    // ── Observed maxima ───────────────────────────────────────────────────

    pub fn max_waiting_up(&self) -> usize {
        self.max_up_seen
    }

    pub fn max_waiting_down(&self) -> usize {
        self.max_down_seen
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn queue_mut(&mut self, direction: Direction) -> &mut VecDeque<PersonId> {
        match direction {
            Direction::Up   => &mut self.up_queue,
            Direction::Down => &mut self.down_queue,
            Direction::Idle => {
                debug_assert!(false, "idle direction has no queue");
                &mut self.up_queue
            }
        }
    }
}
