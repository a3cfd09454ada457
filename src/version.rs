// Package identity baked in at build time

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// User-Agent sent to cAdvisor, e.g. "cpumon/0.1.0".
pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}
