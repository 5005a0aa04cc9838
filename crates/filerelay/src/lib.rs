//! Top-level facade crate for filerelay.
//!
//! Re-exports the core primitives and the server library so users can depend on a single crate.

pub mod core {
    pub use filerelay_core::*;
}

pub mod server {
    pub use filerelay_server::*;
}
