use lift_building::BuildingError;
use lift_control::ControlError;
use lift_core::CoreError;
use lift_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("building error: {0}")]
    Building(#[from] BuildingError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("controller error: {0}")]
    Control(#[from] ControlError),
}

pub type SimResult<T> = Result<T, SimError>;
