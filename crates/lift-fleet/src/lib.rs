//! `lift-fleet` — car mechanics for the rust_lift simulator.
//!
//! A [`Vehicle`] is deliberately dumb: it moves its continuous position
//! toward a target, counts down timed sub-states (doors, loading,
//! unloading), and tracks who is on board.  All *timing semantics* — how
//! long doors dwell, how many seconds a boarding takes — are decided by the
//! controller in `lift-control`; the car only counts down what it is told.
//!
//! The one piece of protocol the car owns is the arrival handshake: when a
//! moving car reaches its target it snaps to the exact floor position and
//! transitions to doors-open on its own.  The controller detects arrival by
//! observing that state, never by scanning position deltas.

pub mod error;
pub mod fleet;
pub mod vehicle;


pub use error::{FleetError, FleetResult};
pub use fleet::FleetStore;
pub use vehicle::{Vehicle, VehicleState, BOARD_SECS_PER_PERSON, UNLOAD_SECS_PER_PERSON};
