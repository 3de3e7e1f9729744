//! Error types for lift-building.

use lift_core::FloorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("building must have at least one floor")]
    NoFloors,

    #[error("floor {0} out of range (building has {1} floors)")]
    FloorOutOfRange(FloorId, u32),
}

pub type BuildingResult<T> = Result<T, BuildingError>;
