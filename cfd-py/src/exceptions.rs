//! Exception hierarchy for the Python bindings

use cfd_core::{CfdError, ErrorKind};
use cfd_native::LoadError;
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyImportError};
use pyo3::prelude::*;

// Create Python exception classes
create_exception!(
    cfd_python,
    CFDError,
    PyException,
    "Base exception for CFD library errors."
);
create_exception!(
    cfd_python,
    CFDMemoryError,
    CFDError,
    "Raised when the CFD library fails to allocate memory (CFD_ERROR_NOMEM, -2)."
);
create_exception!(
    cfd_python,
    CFDInvalidError,
    CFDError,
    "Raised when an invalid argument is passed to a CFD function (CFD_ERROR_INVALID, -3)."
);
create_exception!(
    cfd_python,
    CFDIOError,
    CFDError,
    "Raised when a file I/O operation fails (CFD_ERROR_IO, -4)."
);
create_exception!(
    cfd_python,
    CFDUnsupportedError,
    CFDError,
    "Raised when an unsupported operation or backend is requested (CFD_ERROR_UNSUPPORTED, -5)."
);
create_exception!(
    cfd_python,
    CFDDivergedError,
    CFDError,
    "Raised when the solver diverges during computation (CFD_ERROR_DIVERGED, -6)."
);
create_exception!(
    cfd_python,
    CFDMaxIterError,
    CFDError,
    "Raised when the solver reaches its iteration limit without converging (CFD_ERROR_MAX_ITER, -7)."
);
create_exception!(
    cfd_python,
    ExtensionNotBuiltError,
    PyImportError,
    "Raised when the native engine is not built (development mode)."
);

/// Map a typed error onto the exception class for its kind.
///
/// The rendered message carries the original status code
/// (`"... (status=N)"`), so two failures that both classify as the base
/// class stay distinguishable on the Python side.
pub fn raise_from(err: CfdError) -> PyErr {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::OutOfMemory => CFDMemoryError::new_err(message),
        ErrorKind::InvalidArgument => CFDInvalidError::new_err(message),
        ErrorKind::Io => CFDIOError::new_err(message),
        ErrorKind::Unsupported => CFDUnsupportedError::new_err(message),
        ErrorKind::Diverged => CFDDivergedError::new_err(message),
        ErrorKind::MaxIterationsReached => CFDMaxIterError::new_err(message),
        ErrorKind::Generic => CFDError::new_err(message),
    }
}

/// Map an engine load failure onto the import-error hierarchy.
pub fn raise_from_load(err: LoadError) -> PyErr {
    match err {
        LoadError::NotBuilt => ExtensionNotBuiltError::new_err(err.to_string()),
        LoadError::LoadFailed { .. } => PyImportError::new_err(err.to_string()),
    }
}

/// Register all exception types with the Python module
pub fn register_exceptions(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("CFDError", py.get_type::<CFDError>())?;
    m.add("CFDMemoryError", py.get_type::<CFDMemoryError>())?;
    m.add("CFDInvalidError", py.get_type::<CFDInvalidError>())?;
    m.add("CFDIOError", py.get_type::<CFDIOError>())?;
    m.add("CFDUnsupportedError", py.get_type::<CFDUnsupportedError>())?;
    m.add("CFDDivergedError", py.get_type::<CFDDivergedError>())?;
    m.add("CFDMaxIterError", py.get_type::<CFDMaxIterError>())?;
    m.add(
        "ExtensionNotBuiltError",
        py.get_type::<ExtensionNotBuiltError>(),
    )?;
    Ok(())
}
