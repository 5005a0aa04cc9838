//! Relay config loader (strict YAML + environment overrides).
//!
//! Precedence: built-in defaults, then the YAML file, then environment
//! variables named after the upper-cased keys (`SERVE_ADDR`, ...).

pub mod duration;
pub mod schema;

use std::fs;
use std::path::Path;

use filerelay_core::error::{RelayError, Result};

pub use schema::{LogOutput, RefreshInterval, RelayConfig, LIVENESS_PATH, MAX_REFRESH_INTERVAL};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FILERELAY_CONFIG";
/// Picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "filerelay.yaml";

/// Load from the process environment.
pub fn load() -> Result<RelayConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using `env` to look up variables.
pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<RelayConfig> {
    let mut cfg = match env(CONFIG_PATH_ENV) {
        Some(path) => parse_file(Path::new(&path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            parse_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => RelayConfig::default(),
    };
    apply_env(&mut cfg, env)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<RelayConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse_file(path: &Path) -> Result<RelayConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        RelayError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    parse_str(&s)
}

fn parse_str(s: &str) -> Result<RelayConfig> {
    // An empty document means "all defaults".
    if s.trim().is_empty() {
        return Ok(RelayConfig::default());
    }
    serde_yaml::from_str(s).map_err(|e| RelayError::Config(format!("invalid yaml: {e}")))
}

fn apply_env(cfg: &mut RelayConfig, env: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(v) = env("SERVE_ADDR") {
        cfg.serve_addr = v;
    }
    if let Some(v) = env("METRICS_FILE_PATH") {
        cfg.metrics_file_path = v.into();
    }
    if let Some(v) = env("METRICS_ENDPOINT") {
        cfg.metrics_endpoint = v;
    }
    if let Some(v) = env("REFRESH_INTERVAL") {
        cfg.refresh_interval = RefreshInterval::parse(&v)?;
    }
    if let Some(v) = env("LOG_OUTPUT") {
        cfg.log_output = LogOutput::from(v);
    }
    Ok(())
}
