use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use filerelay_core::error::{RelayError, Result};

use super::duration::parse_duration;

/// Path reserved for the liveness route.
pub const LIVENESS_PATH: &str = "/";

/// Longest accepted `refresh_interval` (7 days).
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(7 * 24 * 3600);

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    #[serde(default = "default_serve_addr")]
    pub serve_addr: String,

    #[serde(default = "default_metrics_file_path")]
    pub metrics_file_path: PathBuf,

    #[serde(default = "default_metrics_endpoint")]
    pub metrics_endpoint: String,

    #[serde(default)]
    pub refresh_interval: RefreshInterval,

    #[serde(default)]
    pub log_output: LogOutput,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            serve_addr: default_serve_addr(),
            metrics_file_path: default_metrics_file_path(),
            metrics_endpoint: default_metrics_endpoint(),
            refresh_interval: RefreshInterval::default(),
            log_output: LogOutput::default(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if self.metrics_file_path.as_os_str().is_empty() {
            return Err(RelayError::Config("metrics_file_path must not be empty".into()));
        }
        if !self.metrics_endpoint.starts_with('/') {
            return Err(RelayError::Config(format!(
                "metrics_endpoint must start with '/': {}",
                self.metrics_endpoint
            )));
        }
        if self.metrics_endpoint == LIVENESS_PATH {
            return Err(RelayError::Config(
                "metrics_endpoint must not be '/' (reserved for liveness)".into(),
            ));
        }
        // Route captures (`:name`, `*rest`) are router syntax, not literal paths.
        if self.metrics_endpoint.contains([':', '*']) {
            return Err(RelayError::Config(format!(
                "metrics_endpoint must not contain ':' or '*': {}",
                self.metrics_endpoint
            )));
        }
        if self.refresh_interval() > MAX_REFRESH_INTERVAL {
            return Err(RelayError::Config(format!(
                "refresh_interval must be at most {}",
                humantime::format_duration(MAX_REFRESH_INTERVAL)
            )));
        }
        Ok(())
    }

    /// Resolve `serve_addr`. A bare `:port` binds all interfaces.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let raw = self.serve_addr.trim();
        let expanded = match raw.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => raw.to_string(),
        };
        expanded.parse().map_err(|e| {
            RelayError::Config(format!("serve_addr must be a valid socket address ({raw}): {e}"))
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval.0
    }
}

fn default_serve_addr() -> String {
    ":8080".into()
}
fn default_metrics_file_path() -> PathBuf {
    PathBuf::from("metrics.txt")
}
fn default_metrics_endpoint() -> String {
    "/metrics".into()
}

/// Polling period. Zero disables periodic refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct RefreshInterval(pub Duration);

impl RefreshInterval {
    pub fn parse(s: &str) -> Result<Self> {
        parse_duration(s).map(Self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntervalRepr {
    Secs(u64),
    Text(String),
}

impl TryFrom<IntervalRepr> for RefreshInterval {
    type Error = RelayError;

    fn try_from(v: IntervalRepr) -> Result<Self> {
        match v {
            IntervalRepr::Secs(s) => Ok(Self(Duration::from_secs(s))),
            IntervalRepr::Text(s) => Self::parse(&s),
        }
    }
}

/// Where diagnostic log lines go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
    /// Appended to; created if missing.
    File(PathBuf),
}

impl From<String> for LogOutput {
    fn from(s: String) -> Self {
        match s.trim() {
            "" | "stderr" => LogOutput::Stderr,
            "stdout" => LogOutput::Stdout,
            path => LogOutput::File(PathBuf::from(path)),
        }
    }
}
