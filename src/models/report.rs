// HTTP response bodies

use crate::error::{CpuUsageError, ErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuUsageReport {
    pub total_cpu_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Outcome of a measurement that keeps "0% utilization" apart from "measurement failed".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuMeasurement {
    pub total_cpu_percent: f64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MeasurementError>,
}

impl From<Result<f64, CpuUsageError>> for CpuMeasurement {
    fn from(result: Result<f64, CpuUsageError>) -> Self {
        match result {
            Ok(total_cpu_percent) => Self {
                total_cpu_percent,
                ok: true,
                error: None,
            },
            Err(e) => Self {
                total_cpu_percent: 0.0,
                ok: false,
                error: Some(MeasurementError {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            },
        }
    }
}
