//! Driver + store under concurrent readers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use filerelay_core::{RefreshDriver, SnapshotStore};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_only_ever_see_whole_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.txt");

    // Two large, distinct payloads. The writer swaps them in by rename so each
    // read of the source is itself consistent.
    let a = Bytes::from("a 1\n".repeat(20_000));
    let b = Bytes::from("b 2\n".repeat(20_000));
    std::fs::write(&path, &a).unwrap();

    let store = Arc::new(SnapshotStore::new());
    let driver = RefreshDriver::new(&path, Duration::from_millis(5), Arc::clone(&store));
    driver.load_initial().await.unwrap();
    let handle = driver.spawn().unwrap();

    let flipper = {
        let path = path.clone();
        let dir = dir.path().to_path_buf();
        let (a, b) = (a.clone(), b.clone());
        tokio::spawn(async move {
            for i in 0..40 {
                let next = if i % 2 == 0 { &b } else { &a };
                let tmp = dir.join("metrics.tmp");
                tokio::fs::write(&tmp, next).await.unwrap();
                tokio::fs::rename(&tmp, &path).await.unwrap();
                tokio::time::sleep(Duration::from_millis(7)).await;
            }
        })
    };

    let mut readers = Vec::new();
    for _ in 0..6 {
        let store = Arc::clone(&store);
        let (a, b) = (a.clone(), b.clone());
        readers.push(tokio::spawn(async move {
            for _ in 0..300 {
                let got = store.read().await;
                assert!(got == a || got == b, "torn snapshot of {} bytes", got.len());
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }));
    }

    flipper.await.unwrap();
    for r in readers {
        r.await.unwrap();
    }
    handle.shutdown().await;

    assert!(store.generation().await > 1, "driver never refreshed");
}
