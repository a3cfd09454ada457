// cAdvisor JSON shapes. Only the fields the calculator needs are modelled;
// everything else in the response is ignored.

use crate::error::CpuUsageError;
use crate::models::{Sample, SampleSet};
use serde::Deserialize;
use serde::de::Error as _;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct ContainerInfo {
    #[serde(default)]
    stats: Option<Vec<ContainerStat>>,
}

// Per-entry fields are optional: only the two newest entries of a container
// are ever read, so a malformed older entry must not fail the response.
#[derive(Debug, Deserialize)]
struct ContainerStat {
    timestamp: Option<String>,
    cpu: Option<CpuStat>,
}

#[derive(Debug, Deserialize)]
struct CpuStat {
    usage: Option<CpuUsage>,
}

#[derive(Debug, Deserialize)]
struct CpuUsage {
    total: Option<u64>,
}

impl ContainerStat {
    fn into_sample(self) -> Option<Sample> {
        let total = self.cpu?.usage?.total?;
        Some(Sample::new(self.timestamp?, total))
    }
}

/// Decode a `/api/v1.3/docker/` response body into samples per container.
/// Containers with a null or missing `stats` list get an empty record.
/// Incomplete entries are dropped unless they are among the two newest of a
/// container with at least two entries, which is a decode error.
pub fn decode_samples(body: &str) -> Result<SampleSet, CpuUsageError> {
    let containers: HashMap<String, ContainerInfo> = serde_json::from_str(body)?;
    let mut set = SampleSet::with_capacity(containers.len());
    for (id, info) in containers {
        let stats = info.stats.unwrap_or_default();
        let len = stats.len();
        let mut samples = Vec::with_capacity(len);
        for (i, stat) in stats.into_iter().enumerate() {
            match stat.into_sample() {
                Some(sample) => samples.push(sample),
                None if len >= 2 && i + 2 >= len => {
                    return Err(serde_json::Error::custom(format!(
                        "container {id}: stat entry {i} lacks timestamp or cpu.usage.total"
                    ))
                    .into());
                }
                None => {}
            }
        }
        set.insert(id, samples);
    }
    Ok(set)
}
