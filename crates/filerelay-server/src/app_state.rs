//! Shared application state for the relay's HTTP handlers.
//!
//! Built once at startup and cloned into each request. The snapshot store is
//! the same `Arc` the refresh driver writes to.

use std::sync::Arc;

use filerelay_core::SnapshotStore;

use crate::config::RelayConfig;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<RelayConfig>,
    store: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(cfg: RelayConfig, store: Arc<SnapshotStore>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            store,
        }
    }

    pub fn cfg(&self) -> &RelayConfig {
        &self.cfg
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }
}
