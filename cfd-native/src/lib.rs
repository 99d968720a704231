//! Native CFD engine contract, loader, and safe wrapper
//!
//! This crate defines the trait boundary to the compiled C engine
//! ([`NativeApi`]), the one-shot startup resolution of whether that engine
//! is available ([`LoadResult`]), and the safe [`Engine`] wrapper that
//! translates raw status codes into typed errors.

#![warn(missing_docs)]

pub mod api;
pub mod constants;
pub mod engine;
#[cfg(feature = "native-engine")]
pub mod ffi;
pub mod loader;
pub mod testing;
pub mod version;

// Re-export key types
pub use api::{NativeApi, RunOutput};
pub use engine::{Engine, SimulationResult};
pub use loader::{load, LoadError, LoadResult};
pub use version::resolve_version;
