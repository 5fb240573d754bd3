use std::net::SocketAddr;

use promtally_core::error::{MetricsError, Result};
use serde::Deserialize;

/// Path served by the liveness probe; the metrics route may not shadow it.
pub const HEALTHZ_PATH: &str = "/healthz";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.exporter.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    #[serde(default = "default_demo_interval_ms")]
    pub demo_interval_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
            demo_interval_ms: default_demo_interval_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') || self.metrics_path.len() < 2 {
            return Err(MetricsError::Config(
                "exporter.metrics_path must start with '/' and name a route".into(),
            ));
        }
        if self.metrics_path == HEALTHZ_PATH {
            return Err(MetricsError::Config(format!(
                "exporter.metrics_path must not be {HEALTHZ_PATH}"
            )));
        }
        if !(100..=60000).contains(&self.demo_interval_ms) {
            return Err(MetricsError::Config(
                "exporter.demo_interval_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MetricsError::Config(format!(
                "exporter.listen {:?} is not a socket address: {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:9464".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_demo_interval_ms() -> u64 {
    1000
}
