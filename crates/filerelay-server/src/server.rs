//! Relay lifecycle: Loading -> Serving.
//!
//! `start` performs the initial file load before the listener is bound, so a
//! missing or unreadable file aborts startup with nothing listening.
//! `serve` runs until the shutdown future resolves, then stops the refresh
//! loop before returning.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use filerelay_core::error::{RelayError, Result};
use filerelay_core::{RefreshDriver, RefreshHandle, SnapshotStore};

use crate::{app_state::AppState, config::RelayConfig, router};

pub struct Relay {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
    refresh: Option<RefreshHandle>,
    endpoint: String,
    store: Arc<SnapshotStore>,
}

impl Relay {
    pub async fn start(cfg: RelayConfig) -> Result<Self> {
        cfg.validate()?;
        let listen = cfg.listen_addr()?;

        tracing::info!(
            metrics_file = %cfg.metrics_file_path.display(),
            refresh_interval = ?cfg.refresh_interval(),
            "filerelay starting"
        );

        let store = Arc::new(SnapshotStore::new());
        let driver = RefreshDriver::new(
            cfg.metrics_file_path.clone(),
            cfg.refresh_interval(),
            Arc::clone(&store),
        );
        driver.load_initial().await?;

        let endpoint = cfg.metrics_endpoint.clone();
        let app = router::build_router(AppState::new(cfg, Arc::clone(&store)));

        let listener = TcpListener::bind(listen)
            .await
            .map_err(|source| RelayError::Bind {
                addr: listen.to_string(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(RelayError::Serve)?;

        let refresh = driver.spawn();

        Ok(Self {
            listener,
            local_addr,
            app,
            refresh,
            endpoint,
            store,
        })
    }

    /// Address actually bound (differs from config when port 0 is used).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn store(&self) -> Arc<SnapshotStore> {
        Arc::clone(&self.store)
    }

    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Relay {
            listener,
            local_addr,
            app,
            refresh,
            endpoint,
            ..
        } = self;

        tracing::info!(%local_addr, %endpoint, "metrics are exposed");

        let res = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Some(handle) = refresh {
            handle.shutdown().await;
        }

        res.map_err(RelayError::Serve)?;
        tracing::info!("HTTP server closed");
        Ok(())
    }
}
