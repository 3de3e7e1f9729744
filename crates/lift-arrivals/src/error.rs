//! Error types for lift-arrivals.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalsError {
    #[error("rate curve must have at least one segment")]
    EmptyCurve,

    #[error("invalid rate segment: {0}")]
    InvalidSegment(String),
}

pub type ArrivalsResult<T> = Result<T, ArrivalsError>;
