//! Snapshot store: the single shared copy of the source file.
//!
//! One writer (the refresh loop) and any number of readers (HTTP handlers)
//! meet here. The buffer sits behind a `tokio::sync::RwLock`, which queues
//! waiters fairly, so a steady stream of readers cannot starve `replace`.
//!
//! Reads hand out a `Bytes` clone (a refcount bump). The guard is released
//! before the caller touches the network, and the old buffer stays alive for
//! any response still writing it after a swap.

use std::time::Instant;

use bytes::Bytes;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Snapshot {
    data: Bytes,
    generation: u64,
    replaced_at: Option<Instant>,
}

/// Latest file contents plus the readers-writer guard.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: RwLock<Snapshot>,
}

impl SnapshotStore {
    /// Empty store (generation 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in `data` wholesale under the exclusive guard.
    pub async fn replace(&self, data: Bytes) {
        let mut snap = self.inner.write().await;
        snap.data = data;
        snap.generation += 1;
        snap.replaced_at = Some(Instant::now());
    }

    /// Current snapshot, copied out under the shared guard.
    pub async fn read(&self) -> Bytes {
        self.inner.read().await.data.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.data.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of completed `replace` calls.
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    pub async fn last_replaced(&self) -> Option<Instant> {
        self.inner.read().await.replaced_at
    }
}
