//! Shared error type across filerelay crates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Stable short codes for log fields and exit diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source file could not be read.
    SourceRead,
    /// Invalid configuration.
    Config,
    /// Listener could not be bound.
    Bind,
    /// Listener failed while serving.
    Serve,
    /// Log target could not be opened.
    Logging,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::SourceRead => "SOURCE_READ",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Bind => "BIND",
            ErrorKind::Serve => "SERVE",
            ErrorKind::Logging => "LOGGING",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("error during reading file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
    #[error("log output: {0}")]
    Logging(String),
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::SourceRead { .. } => ErrorKind::SourceRead,
            RelayError::Config(_) => ErrorKind::Config,
            RelayError::Bind { .. } => ErrorKind::Bind,
            RelayError::Serve(_) => ErrorKind::Serve,
            RelayError::Logging(_) => ErrorKind::Logging,
        }
    }
}
