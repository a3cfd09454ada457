use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub cadvisor: CadvisorConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CadvisorConfig {
    /// Docker container listing endpoint of cAdvisor's v1.3 API.
    #[serde(default = "default_cadvisor_url")]
    pub url: String,
    /// Upper bound for one fetch, so an unreachable cAdvisor cannot stall callers.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for CadvisorConfig {
    fn default() -> Self {
        Self {
            url: default_cadvisor_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_cadvisor_url() -> String {
    "http://cadvisor:8080/api/v1.3/docker/".into()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// Containers whose usage counter went backwards (restart) contribute 0 instead of a negative rate.
    #[serde(default = "default_clamp_negative_rates")]
    pub clamp_negative_rates: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            clamp_negative_rates: default_clamp_negative_rates(),
        }
    }
}

fn default_clamp_negative_rates() -> bool {
    true
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.cadvisor.url.starts_with("http://") || self.cadvisor.url.starts_with("https://"),
            "cadvisor.url must start with http:// or https://, got {:?}",
            self.cadvisor.url
        );
        anyhow::ensure!(
            self.cadvisor.request_timeout_ms > 0,
            "cadvisor.request_timeout_ms must be > 0, got {}",
            self.cadvisor.request_timeout_ms
        );
        Ok(())
    }
}
