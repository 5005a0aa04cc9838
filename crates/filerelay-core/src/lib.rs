//! filerelay core: the snapshot store and the refresh driver that feeds it.
//!
//! A file on disk is read whole, held in memory as an opaque `Bytes` buffer,
//! and replaced on a fixed polling period. Nothing here interprets the
//! contents. The HTTP surface lives in `filerelay-server`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A failed file read surfaces as `RelayError`/`Result` and never reaches
//! the store.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod refresh;
pub mod snapshot;
pub mod source;

/// Shared result type.
pub use error::{ErrorKind, RelayError, Result};
pub use refresh::{RefreshDriver, RefreshHandle};
pub use snapshot::SnapshotStore;
