//! Log subscriber setup.
//!
//! Verbosity comes from `RUST_LOG` (default `info`); the target from
//! `log_output`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use filerelay_core::error::{RelayError, Result};

use crate::config::LogOutput;

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(out: &LogOutput) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    let res = match out {
        LogOutput::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogOutput::Stdout => builder.with_writer(std::io::stdout).try_init(),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| RelayError::Logging(format!("open {}: {e}", path.display())))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    res.map_err(|e| RelayError::Logging(e.to_string()))
}
