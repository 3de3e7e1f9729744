//! Error types for lift-fleet.

use lift_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vehicle id must be a positive, valid id")]
    InvalidId,

    #[error("vehicle capacity must be >= 1")]
    InvalidCapacity,

    #[error("vehicle {0} not found in fleet")]
    UnknownVehicle(VehicleId),

    #[error("vehicle {vehicle} is at capacity ({capacity})")]
    AtCapacity { vehicle: VehicleId, capacity: usize },

    #[error("vehicle {0} is moving without a target floor")]
    NoTarget(VehicleId),
}

pub type FleetResult<T> = Result<T, FleetError>;
