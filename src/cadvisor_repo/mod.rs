// Container CPU samples via the cAdvisor v1.3 REST API

mod wire;

pub use wire::decode_samples;

use crate::error::CpuUsageError;
use crate::models::SampleSet;
use crate::version;
use std::future::Future;
use std::time::Duration;
use tracing::instrument;

/// Where the calculator gets its samples from. Implemented by [`CadvisorRepo`];
/// tests substitute a fixed set of samples.
pub trait SampleSource {
    fn fetch_samples(&self) -> impl Future<Output = Result<SampleSet, CpuUsageError>> + Send;
}

#[derive(Debug, Clone)]
pub struct CadvisorRepo {
    url: String,
    http: reqwest::Client,
}

impl CadvisorRepo {
    /// `url` is the full docker listing endpoint, e.g. `http://cadvisor:8080/api/v1.3/docker/`.
    /// Every request is bounded by `request_timeout`.
    pub fn connect(url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            url: url.to_string(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SampleSource for CadvisorRepo {
    #[instrument(skip(self), fields(repo = "cadvisor", operation = "fetch_samples"))]
    async fn fetch_samples(&self) -> Result<SampleSet, CpuUsageError> {
        let body = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let samples = decode_samples(&body)?;
        tracing::debug!(containers = samples.len(), "fetched cAdvisor samples");
        Ok(samples)
    }
}
