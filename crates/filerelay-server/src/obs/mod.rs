//! Process observability: structured logging via `tracing`.

pub mod logging;

pub use logging::init_logging;
