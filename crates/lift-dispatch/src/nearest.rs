//! The basic nearest-idle policy.

use lift_core::VehicleId;
use lift_events::CallRequest;
use lift_fleet::{Vehicle, VehicleState};

use crate::policy::DispatchPolicy;

/// Order candidates by (idle first, floor distance to origin, id ascending)
/// and take the first.  Purely a function of the fleet state at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestIdle;

impl DispatchPolicy for NearestIdle {
    fn select_vehicle(&mut self, fleet: &[Vehicle], call: &CallRequest) -> Option<VehicleId> {
        fleet
            .iter()
            .min_by_key(|v| {
                let busy = (v.state() != VehicleState::Idle) as u8;
                (busy, v.current_floor().distance_to(call.origin), v.id())
            })
            .map(Vehicle::id)
    }
}
