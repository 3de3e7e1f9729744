//! Per-vehicle active assignment state.

use lift_core::FloorId;
use lift_events::CallRequest;

/// Where an assignment is in its pickup-to-complete life.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AssignmentPhase {
    /// Travelling to the primary call's origin floor.
    GoingToPickup,
    /// Doors open at the pickup floor, dwell timer running.
    DoorDwellAtPickup,
    /// Passengers loading (or about to).
    Boarding,
    /// Travelling to the nearest boarded destination.
    GoingToDropoff,
    /// Doors open at a dropoff floor, dwell timer running.
    DoorDwellAtDropoff,
    /// Passengers unloading (or about to).
    Unloading,
    /// Finished; removed from the active map at the end of the tick.
    Complete,
}

/// One vehicle's current work item: the primary call plus everything that
/// batch-boarded with it.
#[derive(Clone, Debug)]
pub struct ActiveAssignment {
    /// The call this assignment was created for.
    pub primary: CallRequest,

    pub phase: AssignmentPhase,

    /// Whether the pickup dwell timer has been armed (arm exactly once).
    pub pickup_dwell_armed: bool,
    /// Whether the current dropoff dwell timer has been armed.  Reset when
    /// the car departs for the next dropoff.
    pub dropoff_dwell_armed: bool,

    /// Calls currently riding: the primary plus its co-directional batch.
    /// Entries are removed as their destinations are served.
    pub boarded: Vec<CallRequest>,

    /// First dropoff floor, chosen after boarding completes.
    pub next_target: Option<FloorId>,

    /// Whether the dispatch policy has been told about the pickup departure
    /// (told exactly once per assignment).
    pub departure_noted: bool,
}

impl ActiveAssignment {
    pub fn new(primary: CallRequest) -> Self {
        Self {
            primary,
            phase:               AssignmentPhase::GoingToPickup,
            pickup_dwell_armed:  false,
            dropoff_dwell_armed: false,
            boarded:             Vec::new(),
            next_target:         None,
            departure_noted:     false,
        }
    }

    /// The boarded destination nearest to `from`; ties go to the earliest
    /// boarder.  `None` once every boarded call has been served.
    pub fn nearest_destination(&self, from: FloorId) -> Option<FloorId> {
        let mut best: Option<(u32, FloorId)> = None;
        for call in &self.boarded {
            let distance = call.destination.distance_to(from);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, call.destination));
            }
        }
        best.map(|(_, floor)| floor)
    }
}
