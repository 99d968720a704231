//! Python bindings for the CFD simulation engine
//!
//! Exposes the `cfd_python` module: status translation and the exception
//! hierarchy, solver discovery, and simulation entry points. The native
//! engine is resolved once at import; without it the module still imports
//! and degrades to the not-built behavior.

#![allow(non_local_definitions)]

use cfd_core::status::{
    CFD_ERROR, CFD_ERROR_DIVERGED, CFD_ERROR_INVALID, CFD_ERROR_IO, CFD_ERROR_MAX_ITER,
    CFD_ERROR_NOMEM, CFD_ERROR_UNSUPPORTED, CFD_SUCCESS,
};
use cfd_core::{check_status, ErrorKind, NoSource};
use cfd_native::constants::{solver_constant_name, REGISTERED_SOLVERS};
use cfd_native::LoadResult;
use pyo3::prelude::*;

mod exceptions;
mod simulation;

use exceptions::raise_from;

pub(crate) mod load_state {
    //! One-shot engine resolution shared by all module functions

    use crate::exceptions::raise_from_load;
    use cfd_native::{Engine, LoadResult};
    use pyo3::PyResult;
    use std::sync::OnceLock;

    static LOAD: OnceLock<LoadResult> = OnceLock::new();

    /// The cached startup outcome for the native engine.
    pub fn load_result() -> &'static LoadResult {
        LOAD.get_or_init(cfd_native::load)
    }

    /// The engine, or the import-error hierarchy when it is unavailable.
    pub fn engine() -> PyResult<&'static Engine> {
        load_result().engine().map_err(raise_from_load)
    }
}

/// Raise an appropriate exception if status_code indicates an error.
///
/// Non-negative codes return normally. Negative codes raise the exception
/// class matching the code, with a message resolved from the engine's
/// last-error slot when the engine is loaded; without an engine the
/// message degrades to the bare code.
#[pyfunction]
#[pyo3(signature = (status_code, context=None))]
fn raise_for_status(status_code: i32, context: Option<&str>) -> PyResult<()> {
    let translated = match load_state::load_result() {
        LoadResult::Ready(engine) => check_status(status_code, context, engine),
        _ => check_status(status_code, context, &NoSource),
    };
    translated.map(|_| ()).map_err(raise_from)
}

/// Get the human-readable detail for the most recent failure, or None.
#[pyfunction]
fn get_last_error() -> PyResult<Option<String>> {
    Ok(load_state::engine()?.last_error())
}

/// Get the status code of the most recent native call.
#[pyfunction]
fn get_last_status() -> PyResult<i32> {
    Ok(load_state::engine()?.last_status())
}

/// Get the static description of a status code.
///
/// Works without the native engine: degrades to the built-in description
/// for the code's error class.
#[pyfunction]
fn get_error_string(status_code: i32) -> String {
    if let LoadResult::Ready(engine) = load_state::load_result() {
        if let Some(text) = engine.error_string(status_code) {
            return text;
        }
    }
    if status_code >= 0 {
        "success".to_string()
    } else {
        ErrorKind::from_code(status_code).describe().to_string()
    }
}

/// Reset the native error slot.
#[pyfunction]
fn clear_error() -> PyResult<()> {
    load_state::engine()?.clear_error();
    Ok(())
}

/// Main Python module for the CFD bindings
#[pymodule]
fn cfd_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    // Error handling API
    m.add_function(wrap_pyfunction!(raise_for_status, m)?)?;
    m.add_function(wrap_pyfunction!(get_last_error, m)?)?;
    m.add_function(wrap_pyfunction!(get_last_status, m)?)?;
    m.add_function(wrap_pyfunction!(get_error_string, m)?)?;
    m.add_function(wrap_pyfunction!(clear_error, m)?)?;

    // Solver and simulation API
    m.add_function(wrap_pyfunction!(simulation::list_solvers, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::has_solver, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::get_solver_info, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::get_default_solver_params, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::create_grid, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::run_simulation, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::run_simulation_with_params, m)?)?;
    m.add_function(wrap_pyfunction!(simulation::set_output_dir, m)?)?;

    // Exception classes
    exceptions::register_exceptions(py, m)?;

    // Status code constants
    m.add("CFD_SUCCESS", CFD_SUCCESS)?;
    m.add("CFD_ERROR", CFD_ERROR)?;
    m.add("CFD_ERROR_NOMEM", CFD_ERROR_NOMEM)?;
    m.add("CFD_ERROR_INVALID", CFD_ERROR_INVALID)?;
    m.add("CFD_ERROR_IO", CFD_ERROR_IO)?;
    m.add("CFD_ERROR_UNSUPPORTED", CFD_ERROR_UNSUPPORTED)?;
    m.add("CFD_ERROR_DIVERGED", CFD_ERROR_DIVERGED)?;
    m.add("CFD_ERROR_MAX_ITER", CFD_ERROR_MAX_ITER)?;

    // Output field type constants
    m.add("OUTPUT_PRESSURE", cfd_native::constants::OUTPUT_PRESSURE)?;
    m.add("OUTPUT_VELOCITY", cfd_native::constants::OUTPUT_VELOCITY)?;
    m.add("OUTPUT_FULL_FIELD", cfd_native::constants::OUTPUT_FULL_FIELD)?;
    m.add(
        "OUTPUT_CSV_TIMESERIES",
        cfd_native::constants::OUTPUT_CSV_TIMESERIES,
    )?;
    m.add(
        "OUTPUT_CSV_CENTERLINE",
        cfd_native::constants::OUTPUT_CSV_CENTERLINE,
    )?;
    m.add(
        "OUTPUT_CSV_STATISTICS",
        cfd_native::constants::OUTPUT_CSV_STATISTICS,
    )?;

    // Boundary condition constants
    m.add("BC_TYPE_PERIODIC", cfd_native::constants::BC_TYPE_PERIODIC)?;
    m.add("BC_TYPE_NEUMANN", cfd_native::constants::BC_TYPE_NEUMANN)?;
    m.add("BC_TYPE_DIRICHLET", cfd_native::constants::BC_TYPE_DIRICHLET)?;
    m.add("BC_TYPE_NOSLIP", cfd_native::constants::BC_TYPE_NOSLIP)?;
    m.add("BC_TYPE_INLET", cfd_native::constants::BC_TYPE_INLET)?;
    m.add("BC_TYPE_OUTLET", cfd_native::constants::BC_TYPE_OUTLET)?;
    m.add("BC_EDGE_LEFT", cfd_native::constants::BC_EDGE_LEFT)?;
    m.add("BC_EDGE_RIGHT", cfd_native::constants::BC_EDGE_RIGHT)?;
    m.add("BC_EDGE_BOTTOM", cfd_native::constants::BC_EDGE_BOTTOM)?;
    m.add("BC_EDGE_TOP", cfd_native::constants::BC_EDGE_TOP)?;
    m.add("BC_BACKEND_AUTO", cfd_native::constants::BC_BACKEND_AUTO)?;
    m.add("BC_BACKEND_SCALAR", cfd_native::constants::BC_BACKEND_SCALAR)?;
    m.add("BC_BACKEND_OMP", cfd_native::constants::BC_BACKEND_OMP)?;
    m.add("BC_BACKEND_SIMD", cfd_native::constants::BC_BACKEND_SIMD)?;
    m.add("BC_BACKEND_CUDA", cfd_native::constants::BC_BACKEND_CUDA)?;

    // Solver name constants, declared from the engine registry
    for solver in REGISTERED_SOLVERS {
        m.add(solver_constant_name(solver).as_str(), solver)?;
    }

    // Module metadata
    m.add(
        "__version__",
        cfd_native::resolve_version(load_state::load_result()),
    )?;

    Ok(())
}
