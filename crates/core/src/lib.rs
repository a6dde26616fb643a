//! fractura-core
//!
//! Core library for the FRACTURA text-ritual toolkit.
//!
//! This crate defines the configuration model, the workspace layout, the two
//! extraction renderers, the deterministic glitch-fusion transform, and the
//! runner that dispatches steps and keeps the run log.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, scripting bindings, etc.).

pub mod artifact;
pub mod config;
pub mod extract;
pub mod glitch;
pub mod layout;
pub mod runner;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
