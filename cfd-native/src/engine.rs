//! Safe wrapper over the native engine
//!
//! [`Engine`] is where raw status codes become typed [`CfdError`]s: every
//! fallible native call goes through [`check_status`] with an operation
//! context, using the engine's own error slot as the message source.

use crate::api::{NativeApi, RunOutput};
use cfd_core::status::ErrorSource;
use cfd_core::{check_status, CfdError, ErrorKind, GridSpec, SolverInfo, SolverParams};
use std::sync::Arc;

/// Outcome of a completed simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Geometry the run used
    pub grid: GridSpec,
    /// Number of time steps performed
    pub steps: u32,
    /// Raw field data and statistics from the engine
    pub output: RunOutput,
}

/// Handle to a loaded native engine
///
/// Cheap to clone; all clones share the one native engine. The error slot
/// behind `last_error` is global on the native side, so diagnostics are
/// only reliable when no other native call runs between a failure and its
/// translation — `Engine` reads the slot immediately inside each wrapper.
#[derive(Clone)]
pub struct Engine {
    native: Arc<dyn NativeApi>,
}

impl Engine {
    /// Wrap a native engine implementation.
    pub fn new(native: Arc<dyn NativeApi>) -> Self {
        Self { native }
    }

    /// Engine version string, if the engine reports one.
    pub fn version(&self) -> Option<String> {
        self.native.version()
    }

    /// Status code of the most recent native call.
    pub fn last_status(&self) -> i32 {
        self.native.last_status()
    }

    /// Detail for the most recent failure, if any.
    pub fn last_error(&self) -> Option<String> {
        self.native.last_error()
    }

    /// Static description of a status code.
    pub fn error_string(&self, code: i32) -> Option<String> {
        self.native.error_string(code)
    }

    /// Reset the native error slot.
    pub fn clear_error(&self) {
        self.native.clear_error();
    }

    /// Names of all registered solvers.
    pub fn list_solvers(&self) -> Vec<String> {
        self.native.list_solvers()
    }

    /// Whether `name` is a registered solver.
    pub fn has_solver(&self, name: &str) -> bool {
        self.native.has_solver(name)
    }

    /// Metadata for the named solver.
    pub fn solver_info(&self, name: &str) -> Result<SolverInfo, CfdError> {
        if name.is_empty() {
            return Err(CfdError::invalid_argument("solver name must not be empty"));
        }
        let (status, info) = self.native.solver_info(name);
        check_status(status, Some(&format!("querying solver '{name}'")), self)?;
        info.ok_or_else(|| {
            CfdError::with_kind(
                ErrorKind::Generic,
                format!("engine returned no info for solver '{name}'"),
            )
        })
    }

    /// The engine's default solver parameters.
    pub fn default_params(&self) -> SolverParams {
        self.native.default_params()
    }

    /// Run a fresh simulation for `steps` time steps.
    ///
    /// Grid and parameters are validated before the engine is touched, so
    /// caller mistakes surface as [`ErrorKind::InvalidArgument`] without
    /// disturbing the native error slot.
    pub fn run_simulation(
        &self,
        grid: &GridSpec,
        params: &SolverParams,
        steps: u32,
        solver: Option<&str>,
    ) -> Result<SimulationResult, CfdError> {
        grid.validate()?;
        params.validate()?;
        if let Some(name) = solver {
            if !self.native.has_solver(name) {
                return Err(CfdError::unsupported(format!(
                    "unknown solver type: {name}"
                )));
            }
        }

        log::debug!(
            "running simulation: {}x{} grid, {} steps, solver={}",
            grid.nx,
            grid.ny,
            steps,
            solver.unwrap_or("<default>")
        );

        let (status, output) = self.native.run_simulation(grid, params, steps, solver);
        let context = match solver {
            Some(name) => format!("running simulation with solver '{name}'"),
            None => "running simulation".to_string(),
        };
        check_status(status, Some(&context), self)?;

        let output = output.ok_or_else(|| {
            CfdError::with_kind(ErrorKind::Generic, "engine returned no simulation output")
        })?;
        Ok(SimulationResult {
            grid: *grid,
            steps,
            output,
        })
    }

    /// Set the base directory for engine-side output files.
    pub fn set_output_dir(&self, path: &str) -> Result<(), CfdError> {
        let status = self.native.set_output_dir(path);
        check_status(status, Some("setting output directory"), self)?;
        Ok(())
    }
}

impl ErrorSource for Engine {
    fn last_error(&self) -> Option<String> {
        self.native.last_error().filter(|s| !s.is_empty())
    }

    fn error_string(&self, code: i32) -> Option<String> {
        self.native.error_string(code).filter(|s| !s.is_empty())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("abi_version", &self.native.abi_version())
            .field("version", &self.native.version())
            .finish()
    }
}
