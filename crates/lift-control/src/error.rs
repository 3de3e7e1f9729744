//! Error types for lift-control.

use lift_building::BuildingError;
use lift_fleet::FleetError;
use lift_people::PeopleError;
use thiserror::Error;

/// Controller-level failure.  Anything surfacing here is a programmer error
/// (broken invariant, unknown id) — the driver aborts the run on it.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("building error: {0}")]
    Building(#[from] BuildingError),

    #[error("people error: {0}")]
    People(#[from] PeopleError),
}

pub type ControlResult<T> = Result<T, ControlError>;
