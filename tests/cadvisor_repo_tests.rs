// CadvisorRepo against endpoints that cannot answer

use cpumon::cadvisor_repo::{CadvisorRepo, SampleSource};
use cpumon::calculator::{AggregateCpuCalculator, NegativeRatePolicy};
use cpumon::error::ErrorKind;
use std::time::Duration;

/// A local port with nothing listening on it.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/v1.3/docker/")
}

#[tokio::test]
async fn unreachable_endpoint_is_a_fetch_error() {
    let repo = CadvisorRepo::connect(&closed_port_url(), Duration::from_secs(2)).unwrap();
    let err = repo.fetch_samples().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fetch);
}

#[tokio::test]
async fn unreachable_endpoint_fails_open() {
    let repo = CadvisorRepo::connect(&closed_port_url(), Duration::from_secs(2)).unwrap();
    let calc = AggregateCpuCalculator::new(repo, NegativeRatePolicy::Clamp);
    assert_eq!(calc.total_cpu_usage_percent().await, 0.0);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    // Accepts the connection but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let url = format!("http://{addr}/api/v1.3/docker/");
    let repo = CadvisorRepo::connect(&url, Duration::from_millis(200)).unwrap();
    let err = repo.fetch_samples().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fetch);
}
