//! Workspace umbrella for `country-core` and `country-cli`.
//!
//! Re-exports the core crate so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use country_core::*;
