//! Sample summaries: mean, nearest-rank p95, share within target.

use lift_core::PersonType;

/// Default service-level target for waits, in seconds.
pub const DEFAULT_WAIT_TARGET_SECS: f64 = 60.0;

/// Nearest-rank 95th percentile over a sorted copy of `samples`.
///
/// `rank = clamp(ceil(0.95 · n), 1, n)`, returning `sorted[rank − 1]`;
/// 0.0 for an empty sample set.
pub fn nearest_rank_p95(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let rank = ((0.95 * n as f64).ceil() as usize).clamp(1, n);
    sorted[rank - 1]
}

/// Summary of one sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub count: usize,
    pub mean_secs: f64,
    pub p95_secs: f64,
    /// Share of samples at or under the target, in percent.
    pub pct_within_target: f64,
}

impl StatSummary {
    pub fn from_samples(samples: &[f64], target_secs: f64) -> Self {
        if samples.is_empty() {
            return Self { count: 0, mean_secs: 0.0, p95_secs: 0.0, pct_within_target: 0.0 };
        }
        let count = samples.len();
        let mean_secs = samples.iter().sum::<f64>() / count as f64;
        let within = samples.iter().filter(|&&s| s <= target_secs).count();
        Self {
            count,
            mean_secs,
            p95_secs: nearest_rank_p95(samples),
            pct_within_target: 100.0 * within as f64 / count as f64,
        }
    }
}

impl std::fmt::Display for StatSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.1}s p95={:.1}s within-target={:.1}%",
            self.count, self.mean_secs, self.p95_secs, self.pct_within_target
        )
    }
}

/// The full end-of-run report.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub wait: StatSummary,
    pub ride: StatSummary,
    /// Wait breakdown in `PersonType::ALL` order.
    pub wait_by_type: Vec<(PersonType, StatSummary)>,
}

impl std::fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "wait: {}", self.wait)?;
        writeln!(f, "ride: {}", self.ride)?;
        for (person_type, summary) in &self.wait_by_type {
            writeln!(f, "wait[{person_type}]: {summary}")?;
        }
        Ok(())
    }
}
