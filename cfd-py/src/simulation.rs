//! Solver discovery and simulation entry points

use crate::exceptions::raise_from;
use crate::load_state;
use cfd_core::{GridSpec, SolverParams};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// List available solver types.
#[pyfunction]
pub fn list_solvers() -> PyResult<Vec<String>> {
    Ok(load_state::engine()?.list_solvers())
}

/// Check if a solver type is available.
#[pyfunction]
pub fn has_solver(solver_type: &str) -> PyResult<bool> {
    Ok(load_state::engine()?.has_solver(solver_type))
}

/// Get information about a solver type.
#[pyfunction]
pub fn get_solver_info<'py>(py: Python<'py>, solver_type: &str) -> PyResult<Bound<'py, PyDict>> {
    let info = load_state::engine()?
        .solver_info(solver_type)
        .map_err(raise_from)?;
    let dict = PyDict::new(py);
    dict.set_item("name", info.name.as_str())?;
    dict.set_item("description", info.description.as_str())?;
    dict.set_item("version", info.version.as_str())?;
    dict.set_item("capabilities", info.capability_names())?;
    Ok(dict)
}

/// Get default solver parameters as a dictionary.
#[pyfunction]
pub fn get_default_solver_params(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let params = load_state::engine()?.default_params();
    params_dict(py, &params)
}

fn params_dict<'py>(py: Python<'py>, params: &SolverParams) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("dt", params.dt)?;
    dict.set_item("cfl", params.cfl)?;
    dict.set_item("gamma", params.gamma)?;
    dict.set_item("mu", params.mu)?;
    dict.set_item("k", params.k)?;
    dict.set_item("max_iter", params.max_iter)?;
    dict.set_item("tolerance", params.tolerance)?;
    Ok(dict)
}

/// Create a computational grid and return its properties.
///
/// Pure geometry; validates the dimensions and bounds and returns node
/// coordinates without touching the native engine.
#[pyfunction]
pub fn create_grid(
    py: Python<'_>,
    nx: usize,
    ny: usize,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
) -> PyResult<Bound<'_, PyDict>> {
    let spec = GridSpec {
        nx,
        ny,
        xmin,
        xmax,
        ymin,
        ymax,
    };
    spec.validate().map_err(raise_from)?;

    let dict = PyDict::new(py);
    dict.set_item("nx", spec.nx)?;
    dict.set_item("ny", spec.ny)?;
    dict.set_item("xmin", spec.xmin)?;
    dict.set_item("xmax", spec.xmax)?;
    dict.set_item("ymin", spec.ymin)?;
    dict.set_item("ymax", spec.ymax)?;
    dict.set_item("x_coords", spec.x_coords())?;
    dict.set_item("y_coords", spec.y_coords())?;
    Ok(dict)
}

/// Run a complete CFD simulation and return the velocity magnitude field.
#[pyfunction]
#[pyo3(signature = (nx, ny, steps=100, xmin=0.0, xmax=1.0, ymin=0.0, ymax=1.0, solver_type=None))]
#[allow(clippy::too_many_arguments)]
pub fn run_simulation(
    nx: usize,
    ny: usize,
    steps: u32,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    solver_type: Option<&str>,
) -> PyResult<Vec<f64>> {
    let engine = load_state::engine()?;
    let spec = GridSpec {
        nx,
        ny,
        xmin,
        xmax,
        ymin,
        ymax,
    };
    let params = engine.default_params();
    let result = engine
        .run_simulation(&spec, &params, steps, solver_type)
        .map_err(raise_from)?;
    Ok(result.output.velocity_magnitude)
}

/// Run a simulation with custom parameters and return detailed results.
#[pyfunction]
#[pyo3(signature = (nx, ny, xmin, xmax, ymin, ymax, steps=1, dt=1e-3, cfl=0.2, solver_type=None))]
#[allow(clippy::too_many_arguments)]
pub fn run_simulation_with_params<'py>(
    py: Python<'py>,
    nx: usize,
    ny: usize,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    steps: u32,
    dt: f64,
    cfl: f64,
    solver_type: Option<&str>,
) -> PyResult<Bound<'py, PyDict>> {
    let engine = load_state::engine()?;
    let spec = GridSpec {
        nx,
        ny,
        xmin,
        xmax,
        ymin,
        ymax,
    };
    let params = SolverParams {
        dt,
        cfl,
        ..engine.default_params()
    };
    let result = engine
        .run_simulation(&spec, &params, steps, solver_type)
        .map_err(raise_from)?;

    let results = PyDict::new(py);
    results.set_item("velocity_magnitude", result.output.velocity_magnitude.clone())?;
    results.set_item("nx", nx)?;
    results.set_item("ny", ny)?;
    results.set_item("steps", steps)?;
    results.set_item("solver_name", result.output.solver_name.as_str())?;
    results.set_item("solver_description", result.output.solver_description.as_str())?;

    let stats = PyDict::new(py);
    stats.set_item("iterations", result.output.stats.iterations)?;
    stats.set_item("max_velocity", result.output.stats.max_velocity)?;
    stats.set_item("max_pressure", result.output.stats.max_pressure)?;
    stats.set_item("elapsed_time_ms", result.output.stats.elapsed_time_ms)?;
    results.set_item("stats", stats)?;

    Ok(results)
}

/// Set the base output directory for simulation outputs.
#[pyfunction]
pub fn set_output_dir(output_dir: &str) -> PyResult<()> {
    load_state::engine()?
        .set_output_dir(output_dir)
        .map_err(raise_from)
}
