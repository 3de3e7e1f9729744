//! Non-homogeneous Poisson next-arrival sampling via thinning.

use lift_core::{SimRng, SECS_PER_DAY};

use crate::curve::RateCurve;

/// Sample the next arrival instant after `now_secs`, or `None` if no arrival
/// falls within `horizon_secs`.
///
/// Classic thinning against the curve's max-rate envelope: draw candidate
/// gaps from a homogeneous process at `max_rate`, accept each candidate with
/// probability `rate(t) / max_rate`.  Exactly one `u` and one `d` are drawn
/// per candidate — additional draws happen only when thinning rejects, which
/// is intrinsic to the algorithm and still fully deterministic under a fixed
/// seed.
///
/// `start_of_day_secs` maps sim time onto the daily cycle the curve is
/// defined over.  Both uniform samples are drawn from `(0, 1]` so the
/// logarithm stays finite.
pub fn next_arrival(
    curve:             &RateCurve,
    rng:               &mut SimRng,
    now_secs:          f64,
    horizon_secs:      f64,
    start_of_day_secs: f64,
) -> Option<f64> {
    let max_rate = curve.max_rate();
    if max_rate <= 0.0 {
        return None;
    }

    let mut t = now_secs;
    loop {
        let u = rng.unit_open0();
        t += -u.ln() / max_rate;
        if t >= now_secs + horizon_secs {
            return None;
        }

        let d = rng.unit_open0();
        let day_secs = (start_of_day_secs + t).rem_euclid(SECS_PER_DAY);
        if d <= curve.rate_at(day_secs) / max_rate {
            return Some(t);
        }
    }
}
