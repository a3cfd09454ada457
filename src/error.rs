// Failure kinds of one CPU measurement (fetch -> decode -> time parse)

use crate::time::TimeParseError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CpuUsageError {
    #[error("cAdvisor request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("cAdvisor response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    TimeParse(#[from] TimeParseError),
}

/// Coarse error kind; serializes to snake_case JSON (e.g. "time_parse").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Fetch,
    Decode,
    TimeParse,
}

impl CpuUsageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CpuUsageError::Fetch(_) => ErrorKind::Fetch,
            CpuUsageError::Decode(_) => ErrorKind::Decode,
            CpuUsageError::TimeParse(_) => ErrorKind::TimeParse,
        }
    }
}
