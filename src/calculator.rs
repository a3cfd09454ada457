// Aggregate CPU percentage across containers from their two most recent samples.

use crate::cadvisor_repo::SampleSource;
use crate::error::CpuUsageError;
use crate::models::{Sample, SampleSet};
use crate::time::{TimeParseError, to_epoch_nanos};
use tracing::instrument;

/// What to do with a container whose cumulative usage went backwards
/// (counter reset on restart).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegativeRatePolicy {
    /// The container contributes 0.0.
    #[default]
    Clamp,
    /// The negative rate is summed as is and lowers the total.
    Allow,
}

impl NegativeRatePolicy {
    pub fn from_clamp(clamp: bool) -> Self {
        if clamp { Self::Clamp } else { Self::Allow }
    }
}

/// CPU percent of one container between two samples, in single-core units
/// (two fully busy cores = 200%). Zero when time did not move forward.
pub fn container_cpu_percent(
    prev: &Sample,
    current: &Sample,
    policy: NegativeRatePolicy,
) -> Result<f64, TimeParseError> {
    let usage_delta = i128::from(current.cumulative_cpu_usage_nanos)
        - i128::from(prev.cumulative_cpu_usage_nanos);
    let time_delta_ns = to_epoch_nanos(&current.timestamp)? - to_epoch_nanos(&prev.timestamp)?;
    if time_delta_ns <= 0 {
        return Ok(0.0);
    }
    let rate = (usage_delta as f64 / time_delta_ns as f64) * 100.0;
    if rate < 0.0 && policy == NegativeRatePolicy::Clamp {
        return Ok(0.0);
    }
    Ok(rate)
}

/// Sum of per-container rates, rounded once to two decimals. Records with
/// fewer than two samples contribute nothing.
pub fn aggregate_cpu_percent(
    samples: &SampleSet,
    policy: NegativeRatePolicy,
) -> Result<f64, TimeParseError> {
    let mut total = 0.0;
    for record in samples.values() {
        if let [.., prev, current] = record.as_slice() {
            total += container_cpu_percent(prev, current, policy)?;
        }
    }
    Ok(round_to_hundredths(total))
}

/// Round half up (towards positive infinity) to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

pub struct AggregateCpuCalculator<S> {
    source: S,
    policy: NegativeRatePolicy,
}

impl<S: SampleSource> AggregateCpuCalculator<S> {
    pub fn new(source: S, policy: NegativeRatePolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> NegativeRatePolicy {
        self.policy
    }

    /// Fetch fresh samples and compute the total, reporting why a measurement failed.
    pub async fn try_total_cpu_usage_percent(&self) -> Result<f64, CpuUsageError> {
        let samples = self.source.fetch_samples().await?;
        Ok(aggregate_cpu_percent(&samples, self.policy)?)
    }

    /// Fail-open variant: any failure is logged and reported as 0.0.
    #[instrument(skip(self), fields(operation = "total_cpu_usage_percent"))]
    pub async fn total_cpu_usage_percent(&self) -> f64 {
        match self.try_total_cpu_usage_percent().await {
            Ok(percent) => percent,
            Err(e) => {
                tracing::error!(kind = ?e.kind(), error = %e, "CPU usage measurement failed");
                0.0
            }
        }
    }
}
