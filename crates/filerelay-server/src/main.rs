//! filerelay: republish a metrics file on an HTTP scrape endpoint.
//!
//! - `GET <metrics_endpoint>` serves the file's last loaded contents
//! - `GET /` is a liveness check
//! - The file is re-read every `refresh_interval` (0 = load once)

use std::process::ExitCode;

use filerelay_core::error::Result;
use filerelay_server::{config, obs, Relay};

#[tokio::main]
async fn main() -> ExitCode {
    // Logging is not up yet; config errors go straight to stderr.
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("filerelay: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = obs::init_logging(&cfg.log_output) {
        eprintln!("filerelay: {e}");
        return ExitCode::FAILURE;
    }

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.kind().as_str(), error = %e, "fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::RelayConfig) -> Result<()> {
    let relay = Relay::start(cfg).await?;
    relay.serve(shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
