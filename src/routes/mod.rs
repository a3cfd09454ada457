// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::cadvisor_repo::SampleSource;
use crate::calculator::AggregateCpuCalculator;

pub(crate) struct AppState<S> {
    pub(crate) calculator: Arc<AggregateCpuCalculator<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            calculator: self.calculator.clone(),
        }
    }
}

pub fn app<S>(calculator: Arc<AggregateCpuCalculator<S>>) -> Router
where
    S: SampleSource + Send + Sync + 'static,
{
    let state = AppState { calculator };
    Router::new()
        .route("/", get(|| async { "cpumon: container CPU usage from cAdvisor" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/cpu", get(http::cpu_handler::<S>)) // GET /api/cpu
        .route("/api/cpu/measurement", get(http::measurement_handler::<S>)) // GET /api/cpu/measurement
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
