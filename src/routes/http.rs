// GET handlers: version, api/cpu, api/cpu/measurement

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::cadvisor_repo::SampleSource;
use crate::models::{CpuMeasurement, CpuUsageReport};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/cpu — total CPU percent; 0.0 when cAdvisor could not be read.
pub(super) async fn cpu_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: SampleSource + Send + Sync + 'static,
{
    let total_cpu_percent = state.calculator.total_cpu_usage_percent().await;
    Json(CpuUsageReport { total_cpu_percent })
}

/// GET /api/cpu/measurement — like /api/cpu but 503 with the error kind on failure.
pub(super) async fn measurement_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: SampleSource + Send + Sync + 'static,
{
    let result = state.calculator.try_total_cpu_usage_percent().await;
    if let Err(e) = &result {
        tracing::error!(kind = ?e.kind(), error = %e, "CPU measurement failed");
    }
    let measurement = CpuMeasurement::from(result);
    let status = if measurement.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(measurement))
}
