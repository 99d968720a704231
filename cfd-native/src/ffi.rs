//! Raw bindings to the compiled C engine
//!
//! Only compiled with the `native-engine` feature, which requires the
//! engine library to be on the linker path. Struct layouts mirror the
//! prefixes of the engine's `solver_interface.h` / `simulation_api.h`
//! declarations and must be kept in sync with the C headers.

use crate::api::{NativeApi, RunOutput};
use cfd_core::{GridSpec, SolverInfo, SolverParams, SolverStats};
use std::ffi::{c_char, c_double, c_int, c_void, CStr, CString};

/// Opaque engine-side simulation state
#[repr(C)]
pub struct RawSimulation {
    _private: [u8; 0],
}

/// Opaque engine-side flow field
#[repr(C)]
pub struct RawFlowField {
    _private: [u8; 0],
}

#[repr(C)]
struct RawSolver {
    name: *const c_char,
    description: *const c_char,
    version: *const c_char,
    capabilities: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
struct RawSolverParams {
    dt: c_double,
    cfl: c_double,
    gamma: c_double,
    mu: c_double,
    k: c_double,
    max_iter: c_int,
    tolerance: c_double,
}

#[repr(C)]
#[derive(Clone, Copy)]
struct RawSolverStats {
    iterations: c_int,
    max_velocity: c_double,
    max_pressure: c_double,
    elapsed_time_ms: c_double,
}

extern "C" {
    fn cfd_abi_version() -> c_int;
    fn cfd_library_version() -> *const c_char;
    fn cfd_get_last_status() -> c_int;
    fn cfd_get_last_error() -> *const c_char;
    fn cfd_get_error_string(code: c_int) -> *const c_char;
    fn cfd_clear_error();

    fn solver_registry_init();
    fn simulation_list_solvers(names: *mut *const c_char, max: c_int) -> c_int;
    fn simulation_has_solver(name: *const c_char) -> c_int;
    fn solver_create(name: *const c_char) -> *mut RawSolver;
    fn solver_destroy(solver: *mut RawSolver);
    fn solver_params_default() -> RawSolverParams;

    fn init_simulation(
        nx: usize,
        ny: usize,
        xmin: c_double,
        xmax: c_double,
        ymin: c_double,
        ymax: c_double,
    ) -> *mut RawSimulation;
    fn init_simulation_with_solver(
        nx: usize,
        ny: usize,
        xmin: c_double,
        xmax: c_double,
        ymin: c_double,
        ymax: c_double,
        solver: *const c_char,
    ) -> *mut RawSimulation;
    fn simulation_set_params(sim: *mut RawSimulation, params: *const RawSolverParams);
    fn run_simulation_step(sim: *mut RawSimulation) -> c_int;
    fn free_simulation(sim: *mut RawSimulation);
    fn simulation_get_solver(sim: *const RawSimulation) -> *const RawSolver;
    fn simulation_get_stats(sim: *const RawSimulation) -> *const RawSolverStats;
    fn simulation_get_field(sim: *const RawSimulation) -> *const RawFlowField;
    fn simulation_set_output_dir(path: *const c_char);

    fn calculate_velocity_magnitude(field: *const RawFlowField, nx: usize, ny: usize)
        -> *mut c_double;

    fn free(ptr: *mut c_void);
}

fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // Engine strings are static or slot-owned; copy before the slot moves.
    let text = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl From<RawSolverParams> for SolverParams {
    fn from(raw: RawSolverParams) -> Self {
        Self {
            dt: raw.dt,
            cfl: raw.cfl,
            gamma: raw.gamma,
            mu: raw.mu,
            k: raw.k,
            max_iter: raw.max_iter.max(0) as u32,
            tolerance: raw.tolerance,
        }
    }
}

impl From<&SolverParams> for RawSolverParams {
    fn from(params: &SolverParams) -> Self {
        Self {
            dt: params.dt,
            cfl: params.cfl,
            gamma: params.gamma,
            mu: params.mu,
            k: params.k,
            max_iter: params.max_iter.min(c_int::MAX as u32) as c_int,
            tolerance: params.tolerance,
        }
    }
}

/// [`NativeApi`] backed by the linked C engine
pub struct FfiEngine(());

impl FfiEngine {
    /// Bind to the linked engine and initialize its solver registry.
    pub fn new() -> Self {
        unsafe { solver_registry_init() };
        Self(())
    }

    fn read_solver(raw: *const RawSolver) -> Option<SolverInfo> {
        if raw.is_null() {
            return None;
        }
        let solver = unsafe { &*raw };
        Some(SolverInfo {
            name: opt_string(solver.name)?,
            description: opt_string(solver.description).unwrap_or_default(),
            version: opt_string(solver.version).unwrap_or_default(),
            capabilities: solver.capabilities,
        })
    }
}

impl Default for FfiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeApi for FfiEngine {
    fn abi_version(&self) -> u32 {
        unsafe { cfd_abi_version() }.max(0) as u32
    }

    fn version(&self) -> Option<String> {
        opt_string(unsafe { cfd_library_version() })
    }

    fn last_status(&self) -> i32 {
        unsafe { cfd_get_last_status() }
    }

    fn last_error(&self) -> Option<String> {
        opt_string(unsafe { cfd_get_last_error() })
    }

    fn error_string(&self, code: i32) -> Option<String> {
        opt_string(unsafe { cfd_get_error_string(code) })
    }

    fn clear_error(&self) {
        unsafe { cfd_clear_error() }
    }

    fn list_solvers(&self) -> Vec<String> {
        const MAX_SOLVERS: usize = 32;
        let mut names: [*const c_char; MAX_SOLVERS] = [std::ptr::null(); MAX_SOLVERS];
        let count = unsafe { simulation_list_solvers(names.as_mut_ptr(), MAX_SOLVERS as c_int) };
        names
            .iter()
            .take(count.max(0) as usize)
            .filter_map(|&ptr| opt_string(ptr))
            .collect()
    }

    fn has_solver(&self, name: &str) -> bool {
        let Ok(name) = CString::new(name) else {
            return false;
        };
        unsafe { simulation_has_solver(name.as_ptr()) } != 0
    }

    fn solver_info(&self, name: &str) -> (i32, Option<SolverInfo>) {
        let Ok(c_name) = CString::new(name) else {
            return (cfd_core::status::CFD_ERROR_INVALID, None);
        };
        let raw = unsafe { solver_create(c_name.as_ptr()) };
        if raw.is_null() {
            return (self.last_status().min(-1), None);
        }
        let info = Self::read_solver(raw);
        unsafe { solver_destroy(raw) };
        match info {
            Some(info) => (0, Some(info)),
            None => (cfd_core::status::CFD_ERROR, None),
        }
    }

    fn default_params(&self) -> SolverParams {
        unsafe { solver_params_default() }.into()
    }

    fn run_simulation(
        &self,
        grid: &GridSpec,
        params: &SolverParams,
        steps: u32,
        solver: Option<&str>,
    ) -> (i32, Option<RunOutput>) {
        let c_solver = match solver.map(CString::new) {
            Some(Ok(name)) => Some(name),
            Some(Err(_)) => return (cfd_core::status::CFD_ERROR_INVALID, None),
            None => None,
        };

        let sim = unsafe {
            match &c_solver {
                Some(name) => init_simulation_with_solver(
                    grid.nx, grid.ny, grid.xmin, grid.xmax, grid.ymin, grid.ymax,
                    name.as_ptr(),
                ),
                None => {
                    init_simulation(grid.nx, grid.ny, grid.xmin, grid.xmax, grid.ymin, grid.ymax)
                }
            }
        };
        if sim.is_null() {
            return (self.last_status().min(-1), None);
        }

        let raw_params = RawSolverParams::from(params);
        unsafe { simulation_set_params(sim, &raw_params) };

        let mut status = 0;
        for _ in 0..steps {
            status = unsafe { run_simulation_step(sim) };
            if status < 0 {
                break;
            }
        }
        if status < 0 {
            unsafe { free_simulation(sim) };
            return (status, None);
        }

        let (solver_name, solver_description) =
            match Self::read_solver(unsafe { simulation_get_solver(sim) }) {
                Some(info) => (info.name, info.description),
                None => (String::new(), String::new()),
            };

        let stats = {
            let raw = unsafe { simulation_get_stats(sim) };
            if raw.is_null() {
                SolverStats::default()
            } else {
                let raw = unsafe { *raw };
                SolverStats {
                    iterations: raw.iterations.max(0) as u32,
                    max_velocity: raw.max_velocity,
                    max_pressure: raw.max_pressure,
                    elapsed_time_ms: raw.elapsed_time_ms,
                }
            }
        };

        let velocity_magnitude = {
            let field = unsafe { simulation_get_field(sim) };
            let data = unsafe { calculate_velocity_magnitude(field, grid.nx, grid.ny) };
            if data.is_null() {
                Vec::new()
            } else {
                let values = unsafe { std::slice::from_raw_parts(data, grid.len()) }.to_vec();
                unsafe { free(data.cast()) };
                values
            }
        };

        unsafe { free_simulation(sim) };
        (
            0,
            Some(RunOutput {
                velocity_magnitude,
                stats,
                solver_name,
                solver_description,
            }),
        )
    }

    fn set_output_dir(&self, path: &str) -> i32 {
        let Ok(path) = CString::new(path) else {
            return cfd_core::status::CFD_ERROR_INVALID;
        };
        unsafe { simulation_set_output_dir(path.as_ptr()) };
        0
    }
}
