// Shared test helpers

#![allow(dead_code)]

use cpumon::cadvisor_repo::SampleSource;
use cpumon::error::CpuUsageError;
use cpumon::models::{Sample, SampleSet};

/// Test double: returns the same samples (or a decode failure) on every fetch.
pub struct FixedSource {
    samples: Option<SampleSet>,
}

impl FixedSource {
    pub fn new(samples: SampleSet) -> Self {
        Self {
            samples: Some(samples),
        }
    }

    /// A source whose every fetch fails as if cAdvisor returned garbage.
    pub fn failing() -> Self {
        Self { samples: None }
    }
}

impl SampleSource for FixedSource {
    async fn fetch_samples(&self) -> Result<SampleSet, CpuUsageError> {
        match &self.samples {
            Some(samples) => Ok(samples.clone()),
            None => Err(serde_json::from_str::<serde_json::Value>("not json")
                .unwrap_err()
                .into()),
        }
    }
}

/// RFC 3339 timestamp `secs` seconds and `nanos` nanoseconds after the Unix epoch.
pub fn ts(secs: i64, nanos: u32) -> String {
    chrono::DateTime::from_timestamp(secs, nanos)
        .unwrap()
        .to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
}

/// Samples for one container from (epoch seconds, cumulative usage nanos) pairs.
pub fn record(points: &[(i64, u64)]) -> Vec<Sample> {
    points
        .iter()
        .map(|&(secs, usage)| Sample::new(ts(secs, 0), usage))
        .collect()
}

pub fn sample_set(containers: Vec<(&str, Vec<Sample>)>) -> SampleSet {
    containers
        .into_iter()
        .map(|(id, samples)| (id.to_string(), samples))
        .collect()
}

/// One container at 50% (0.5s of CPU over 1s).
pub fn fifty_percent(id: &str) -> (&str, Vec<Sample>) {
    (
        id,
        record(&[
            (1_700_000_000, 1_000_000_000),
            (1_700_000_001, 1_500_000_000),
        ]),
    )
}
