//! The `DispatchPolicy` trait — the controller's strategy seam.

use lift_core::VehicleId;
use lift_events::CallRequest;
use lift_fleet::Vehicle;

/// Pluggable call-to-vehicle assignment strategy.
///
/// `fleet` is the read-only ordered fleet view; implementations must not
/// assume anything about it beyond id order.  Only [`select_vehicle`]
/// [Self::select_vehicle] is required — the tick and departure hooks have
/// no-op defaults so stateless policies stay one-liners.
///
/// The controller calls `begin_tick` once per tick *before* any selection,
/// and `note_departure` when an assigned car leaves its pickup floor.
/// Stateful decorators (cooldown) rely on both.
pub trait DispatchPolicy: Send {
    /// Choose a car for `call`, or `None` if the fleet view is empty.
    ///
    /// Returning a busy car is allowed — the controller stalls the pending
    /// queue head until that car completes its assignment.
    fn select_vehicle(&mut self, fleet: &[Vehicle], call: &CallRequest) -> Option<VehicleId>;

    /// Called once per tick with the current sim time, before selection.
    fn begin_tick(&mut self, _now_secs: f64) {}

    /// Called when an assigned car departs its pickup floor.
    fn note_departure(&mut self, _vehicle: VehicleId, _now_secs: f64) {}
}
