//! `lift-dispatch` — the dispatch-policy extension point.
//!
//! A [`DispatchPolicy`] maps (fleet view, call) to a vehicle id.  The
//! controller holds one as a boxed trait object; decorators compose by
//! holding the inner policy, not by inheritance.
//!
//! Two implementations ship with the simulator:
//!
//! | Policy        | Behavior                                               |
//! |---------------|--------------------------------------------------------|
//! | [`NearestIdle`] | idle-first, then nearest, then lowest id             |
//! | [`Cooldown`]  | filters recently departed cars; falls through to the   |
//! |               | full fleet when everything is cooling (anti-starvation)|
//!
//! Determinism note: every tie is broken by ascending vehicle id, so a
//! given fleet state always yields the same selection.

pub mod cooldown;
pub mod nearest;
pub mod policy;

#[cfg(test)]
mod tests;

pub use cooldown::{Cooldown, DEFAULT_COOLDOWN_SECS};
pub use nearest::NearestIdle;
pub use policy::DispatchPolicy;
