// Raw cumulative CPU samples as fetched from cAdvisor

use std::collections::HashMap;

/// One timestamped CPU measurement of a container.
///
/// The timestamp is kept in its RFC 3339 wire form; it is only parsed for the
/// two samples the calculator actually reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub timestamp: String,
    /// Total CPU time consumed since container start, in nanoseconds.
    pub cumulative_cpu_usage_nanos: u64,
}

impl Sample {
    pub fn new(timestamp: impl Into<String>, cumulative_cpu_usage_nanos: u64) -> Self {
        Self {
            timestamp: timestamp.into(),
            cumulative_cpu_usage_nanos,
        }
    }
}

/// Samples of one container, oldest first.
pub type ContainerRecord = Vec<Sample>;

/// Container id -> its samples.
pub type SampleSet = HashMap<String, ContainerRecord>;
