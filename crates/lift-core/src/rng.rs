//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The run owns exactly one `SimRng`, seeded from `SimParams::seed` and
//! consumed only by the passenger controller, in a fixed per-tick order.
//! Every stochastic decision (arrival instants, destinations, stay lengths)
//! draws from this single stream, so identical seed and inputs reproduce the
//! run byte-for-byte.  Nothing else in the simulator may hold an RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded simulation RNG.  Deliberately `!Sync` — the stream must never be
/// shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform sample in the half-open interval `(0, 1]`.
    ///
    /// The thinning sampler takes `ln` of these values; excluding 0 keeps the
    /// logarithm finite.
    #[inline]
    pub fn unit_open0(&mut self) -> f64 {
        1.0 - self.0.r#gen::<f64>()
    }
}
