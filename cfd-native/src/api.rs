//! Trait boundary to the compiled engine

use cfd_core::{GridSpec, SolverInfo, SolverParams, SolverStats};

/// Raw field data and statistics returned by a native simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Velocity magnitude per grid cell, row-major, `nx * ny` values
    pub velocity_magnitude: Vec<f64>,
    /// Statistics reported by the solver for this run
    pub stats: SolverStats,
    /// Registry name of the solver that ran
    pub solver_name: String,
    /// Human description of the solver that ran
    pub solver_description: String,
}

/// Operations the compiled CFD engine exposes to the bindings
///
/// Fallible operations return the engine's raw status code; translation
/// into typed errors happens in [`crate::Engine`], not here. The error
/// slot (`last_status`/`last_error`) is process-global on the native side:
/// it reflects the most recent failing call on any thread, so it must be
/// read directly after the call it describes.
pub trait NativeApi: Send + Sync {
    /// ABI revision of the linked engine, checked once at load time.
    fn abi_version(&self) -> u32;

    /// Engine version string, if the engine reports one.
    fn version(&self) -> Option<String>;

    /// Status code of the most recent native call.
    fn last_status(&self) -> i32;

    /// Detail recorded for the most recent failure; `None` when the slot
    /// is empty or unreadable.
    fn last_error(&self) -> Option<String>;

    /// Static description of `code`, independent of any prior failure.
    fn error_string(&self, code: i32) -> Option<String>;

    /// Reset the error slot. Invoked by callers, never by the translator.
    fn clear_error(&self);

    /// Names of all registered solvers.
    fn list_solvers(&self) -> Vec<String>;

    /// Whether `name` is a registered solver.
    fn has_solver(&self, name: &str) -> bool;

    /// Metadata for the named solver, with the raw status code.
    fn solver_info(&self, name: &str) -> (i32, Option<SolverInfo>);

    /// The engine's default solver parameters.
    fn default_params(&self) -> SolverParams;

    /// Run `steps` time steps on a fresh simulation, with the raw status
    /// code. `solver` of `None` selects the engine default.
    fn run_simulation(
        &self,
        grid: &GridSpec,
        params: &SolverParams,
        steps: u32,
        solver: Option<&str>,
    ) -> (i32, Option<RunOutput>);

    /// Set the base directory for engine-side output files.
    fn set_output_dir(&self, path: &str) -> i32;
}
