//! Refresh driver: keeps the snapshot store in step with the source file.
//!
//! Startup does one load before anything is served. After that a single
//! background loop polls the file at a fixed period. Each tick finishes its
//! read-then-replace before the next one starts, so refreshes never overlap.
//! A failed tick is logged and the previous snapshot stays in place.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::Result;
use crate::snapshot::SnapshotStore;
use crate::source::read_source;

pub struct RefreshDriver {
    path: PathBuf,
    interval: Duration,
    store: Arc<SnapshotStore>,
}

impl RefreshDriver {
    /// `interval == 0` disables periodic refresh.
    pub fn new(path: impl Into<PathBuf>, interval: Duration, store: Arc<SnapshotStore>) -> Self {
        Self {
            path: path.into(),
            interval,
            store,
        }
    }

    /// Initial load. An error here must abort startup.
    pub async fn load_initial(&self) -> Result<usize> {
        let n = self.refresh_once().await?;
        tracing::info!(path = %self.path.display(), bytes = n, "initial snapshot loaded");
        Ok(n)
    }

    /// Read the file and swap it in. On error the store is left untouched.
    pub async fn refresh_once(&self) -> Result<usize> {
        // I/O happens before the write guard is taken.
        let data = read_source(&self.path).await?;
        let n = data.len();
        self.store.replace(data).await;
        Ok(n)
    }

    /// Start the polling loop. Returns `None` when refresh is disabled or the
    /// interval cannot be scheduled.
    pub fn spawn(self) -> Option<RefreshHandle> {
        if self.interval.is_zero() {
            tracing::info!(path = %self.path.display(), "periodic refresh disabled");
            return None;
        }

        // The initial load already happened; first tick is one period out.
        let Some(start) = Instant::now().checked_add(self.interval) else {
            tracing::error!(
                path = %self.path.display(),
                interval = ?self.interval,
                "refresh interval out of range; periodic refresh not started"
            );
            return None;
        };

        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(start, stop_rx));
        Some(RefreshHandle {
            stop: stop_tx,
            task: Some(task),
        })
    }

    async fn run(self, start: Instant, mut stop: watch::Receiver<bool>) {
        let mut tick = tokio::time::interval_at(start, self.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            path = %self.path.display(),
            interval_ms = self.interval.as_millis() as u64,
            "refresh loop started"
        );

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    match self.refresh_once().await {
                        Ok(bytes) => {
                            let generation = self.store.generation().await;
                            tracing::debug!(bytes, generation, "snapshot refreshed");
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %self.path.display(),
                                code = e.kind().as_str(),
                                error = %e,
                                "failed to load metrics file; keeping previous snapshot"
                            );
                        }
                    }
                }
                res = stop.changed() => {
                    if res.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("refresh loop stopped");
    }
}

/// Owns the background refresh task.
///
/// `shutdown` stops the loop and waits for it. Dropping the handle without
/// calling `shutdown` aborts the task.
pub struct RefreshHandle {
    stop: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "refresh task ended abnormally");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
