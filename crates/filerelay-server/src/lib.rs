//! filerelay server library entry.
//!
//! Wires config, logging, the snapshot store, the refresh driver and the
//! axum router into a runnable relay. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;

pub use server::Relay;
