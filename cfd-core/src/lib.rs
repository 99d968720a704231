//! Status taxonomy and core value types for the CFD engine bindings
//!
//! This crate owns the status-code-to-error translation contract shared by
//! every layer that talks to the native engine, plus the plain value types
//! (solver parameters, grid geometry, solver metadata) that cross that
//! boundary.

#![warn(missing_docs)]

pub mod error;
pub mod grid;
pub mod params;
pub mod solver;
pub mod status;

// Re-export key types
pub use error::CfdError;
pub use grid::GridSpec;
pub use params::SolverParams;
pub use solver::{SolverInfo, SolverStats};
pub use status::{check_status, ErrorKind, ErrorSource, NoSource};

/// Result type for operations that can fail with a native-status error
pub type Result<T> = std::result::Result<T, CfdError>;
