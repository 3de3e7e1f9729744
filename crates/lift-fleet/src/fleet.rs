//! The `FleetStore` — ordered storage for every car in the building.

use lift_core::{FloorId, VehicleId};

use crate::error::{FleetError, FleetResult};
use crate::vehicle::Vehicle;

/// All cars of the run, in id order.  Car ids are `1..=count`; the vector
/// index is `id - 1`.
pub struct FleetStore {
    vehicles: Vec<Vehicle>,
}

impl FleetStore {
    /// Build a fleet of `count` cars of the given capacity, all parked at
    /// `start_floor` with doors closed.
    pub fn new(count: u32, capacity: usize, start_floor: FloorId) -> FleetResult<Self> {
        let vehicles = (1..=count)
            .map(|i| Vehicle::new(VehicleId(i), capacity, start_floor))
            .collect::<FleetResult<Vec<_>>>()?;
        Ok(Self { vehicles })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Read-only ordered view of the whole fleet — the dispatch policies'
    /// input.
    #[inline]
    pub fn as_slice(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> FleetResult<&Vehicle> {
        self.index_of(id).map(|i| &self.vehicles[i])
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> FleetResult<&mut Vehicle> {
        let i = self.index_of(id)?;
        Ok(&mut self.vehicles[i])
    }

    /// Iterator over all vehicle ids in ascending order.
    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        (1..=self.vehicles.len() as u32).map(VehicleId)
    }

    /// Advance every car's mechanics by `dt` at `speed` floors/second.
    pub fn update_all(&mut self, dt: f64, speed: f64) -> FleetResult<()> {
        for vehicle in &mut self.vehicles {
            vehicle.update(dt, speed)?;
        }
        Ok(())
    }

    /// Total passengers currently on board across the fleet.
    pub fn total_occupants(&self) -> usize {
        self.vehicles.iter().map(Vehicle::occupant_count).sum()
    }

    fn index_of(&self, id: VehicleId) -> FleetResult<usize> {
        if id.0 >= 1 && (id.0 as usize) <= self.vehicles.len() {
            Ok(id.0 as usize - 1)
        } else {
            Err(FleetError::UnknownVehicle(id))
        }
    }
}
