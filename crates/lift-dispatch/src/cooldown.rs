//! Cooldown decorator: keeps just-departed cars out of selection for a while.

use lift_core::VehicleId;
use lift_events::CallRequest;
use lift_fleet::Vehicle;
use rustc_hash::FxHashMap;

use crate::policy::DispatchPolicy;

/// Default minimum sim-time between a car's departure and its next selection.
pub const DEFAULT_COOLDOWN_SECS: f64 = 3.0;

/// Wraps an inner policy with a per-vehicle departure clock.
///
/// Cars whose `departed_at + cooldown` is still in the future are hidden
/// from the inner policy.  If that would hide the *entire* fleet, selection
/// falls through to the full fleet instead — a cooling fleet must never
/// starve a call.
///
/// The decorator learns the current time from [`begin_tick`]
/// [DispatchPolicy::begin_tick]; it has no clock of its own.
pub struct Cooldown<P> {
    inner:         P,
    cooldown_secs: f64,
    now_secs:      f64,
    departed_at:   FxHashMap<VehicleId, f64>,
}

impl<P> Cooldown<P> {
    /// Wrap `inner` with the default 3-second cooldown.
    pub fn new(inner: P) -> Self {
        Self::with_cooldown(inner, DEFAULT_COOLDOWN_SECS)
    }

    pub fn with_cooldown(inner: P, cooldown_secs: f64) -> Self {
        Self {
            inner,
            cooldown_secs,
            now_secs:    0.0,
            departed_at: FxHashMap::default(),
        }
    }

    fn is_cooling(&self, vehicle: VehicleId) -> bool {
        match self.departed_at.get(&vehicle) {
            Some(&departed) => departed + self.cooldown_secs > self.now_secs,
            None => false,
        }
    }
}

impl<P: DispatchPolicy> DispatchPolicy for Cooldown<P> {
    fn select_vehicle(&mut self, fleet: &[Vehicle], call: &CallRequest) -> Option<VehicleId> {
        let eligible: Vec<Vehicle> = fleet
            .iter()
            .filter(|v| !self.is_cooling(v.id()))
            .cloned()
            .collect();

        if eligible.is_empty() {
            // Anti-starvation: everything is cooling, consider the full fleet.
            self.inner.select_vehicle(fleet, call)
        } else {
            self.inner.select_vehicle(&eligible, call)
        }
    }

    fn begin_tick(&mut self, now_secs: f64) {
        self.now_secs = now_secs;
        self.inner.begin_tick(now_secs);
    }

    fn note_departure(&mut self, vehicle: VehicleId, now_secs: f64) {
        self.departed_at.insert(vehicle, now_secs);
        self.inner.note_departure(vehicle, now_secs);
    }
}
