//! Status codes and the status-to-error translation contract
//!
//! The native engine reports failure through signed integer status codes:
//! any non-negative value is success, each negative value selects a failure
//! class. [`check_status`] is the single place where a raw code becomes a
//! typed [`CfdError`].

use crate::error::CfdError;

/// Status code returned by successful native operations.
pub const CFD_SUCCESS: i32 = 0;
/// Unclassified failure.
pub const CFD_ERROR: i32 = -1;
/// Allocation failure inside the native engine.
pub const CFD_ERROR_NOMEM: i32 = -2;
/// Caller supplied invalid parameters.
pub const CFD_ERROR_INVALID: i32 = -3;
/// File read or write failure.
pub const CFD_ERROR_IO: i32 = -4;
/// Requested capability or backend is not available on this host.
pub const CFD_ERROR_UNSUPPORTED: i32 = -5;
/// Numerical solver instability (time step too large, etc.).
pub const CFD_ERROR_DIVERGED: i32 = -6;
/// Iterative solver exhausted its iteration budget without converging.
pub const CFD_ERROR_MAX_ITER: i32 = -7;

/// Closed classification of native failure causes
///
/// One variant per distinct negative status code the engine defines.
/// Unknown negative codes degrade to [`ErrorKind::Generic`]; the original
/// code is preserved separately on [`CfdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unclassified failure (`CFD_ERROR`, -1)
    Generic,
    /// Allocation failure in the native layer (`CFD_ERROR_NOMEM`, -2)
    OutOfMemory,
    /// Invalid caller-supplied parameters (`CFD_ERROR_INVALID`, -3)
    InvalidArgument,
    /// File I/O failure (`CFD_ERROR_IO`, -4)
    Io,
    /// Capability or backend not available (`CFD_ERROR_UNSUPPORTED`, -5)
    Unsupported,
    /// Solver diverged (`CFD_ERROR_DIVERGED`, -6)
    Diverged,
    /// Iteration budget exhausted (`CFD_ERROR_MAX_ITER`, -7)
    MaxIterationsReached,
}

impl ErrorKind {
    /// Classify a status code.
    ///
    /// Total over all negative codes: values outside the known table map to
    /// `Generic`. Must not be called with a success code; [`check_status`]
    /// filters those out first.
    pub fn from_code(code: i32) -> Self {
        match code {
            CFD_ERROR_NOMEM => ErrorKind::OutOfMemory,
            CFD_ERROR_INVALID => ErrorKind::InvalidArgument,
            CFD_ERROR_IO => ErrorKind::Io,
            CFD_ERROR_UNSUPPORTED => ErrorKind::Unsupported,
            CFD_ERROR_DIVERGED => ErrorKind::Diverged,
            CFD_ERROR_MAX_ITER => ErrorKind::MaxIterationsReached,
            _ => ErrorKind::Generic,
        }
    }

    /// Canonical status code for this kind.
    ///
    /// Note this is the kind's own table code, not necessarily the code a
    /// particular error was built from (unmapped codes classify as
    /// `Generic` but keep their original value).
    pub fn code(&self) -> i32 {
        match self {
            ErrorKind::Generic => CFD_ERROR,
            ErrorKind::OutOfMemory => CFD_ERROR_NOMEM,
            ErrorKind::InvalidArgument => CFD_ERROR_INVALID,
            ErrorKind::Io => CFD_ERROR_IO,
            ErrorKind::Unsupported => CFD_ERROR_UNSUPPORTED,
            ErrorKind::Diverged => CFD_ERROR_DIVERGED,
            ErrorKind::MaxIterationsReached => CFD_ERROR_MAX_ITER,
        }
    }

    /// Static canned description, used as a message fallback when the
    /// native layer supplies nothing better.
    pub fn describe(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "unspecified CFD error",
            ErrorKind::OutOfMemory => "memory allocation failed",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Io => "file I/O failed",
            ErrorKind::Unsupported => "operation not supported",
            ErrorKind::Diverged => "solver diverged",
            ErrorKind::MaxIterationsReached => "maximum iterations reached without convergence",
        }
    }
}

/// Provider of human-readable detail for failed native calls
///
/// Both queries return `None` when the underlying lookup is unavailable or
/// empty; the translator then falls through to its next message tier.
/// Implementations must not panic: this seam exists precisely so that
/// reporting a failure can never itself fail.
pub trait ErrorSource {
    /// Detail recorded for the most recent failure, if any.
    fn last_error(&self) -> Option<String>;

    /// Static, code-indexed description, independent of any prior failure.
    fn error_string(&self, code: i32) -> Option<String>;
}

/// The always-empty [`ErrorSource`], for when the native layer is
/// unreachable (not built, or failed to load). Message resolution degrades
/// to the code-only fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl ErrorSource for NoSource {
    fn last_error(&self) -> Option<String> {
        None
    }

    fn error_string(&self, _code: i32) -> Option<String> {
        None
    }
}

/// Translate a native status code into a typed error.
///
/// Non-negative codes are success and are returned unchanged (many native
/// calls overload the positive range with counts). Negative codes produce a
/// [`CfdError`] whose message is resolved with three fallback tiers:
///
/// 1. the source's last-error slot, if non-empty;
/// 2. the source's canned description of `code`, if non-empty;
/// 3. a synthesized `"CFD error code {code}"`.
///
/// A non-empty `context` is prepended as `"{context}: {message}"`. The
/// original code is preserved verbatim on the error even when it classifies
/// as [`ErrorKind::Generic`]. The native error slot is never cleared here;
/// that is a separate operation owned by the caller.
pub fn check_status<S>(code: i32, context: Option<&str>, source: &S) -> Result<i32, CfdError>
where
    S: ErrorSource + ?Sized,
{
    if code >= 0 {
        return Ok(code);
    }

    let detail = source
        .last_error()
        .filter(|s| !s.is_empty())
        .or_else(|| source.error_string(code).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| format!("CFD error code {code}"));

    let message = match context {
        Some(ctx) if !ctx.is_empty() => format!("{ctx}: {detail}"),
        _ => detail,
    };

    Err(CfdError::new(ErrorKind::from_code(code), code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedSource {
        last: Option<String>,
        canned: Option<String>,
    }

    impl ErrorSource for FixedSource {
        fn last_error(&self) -> Option<String> {
            self.last.clone()
        }

        fn error_string(&self, _code: i32) -> Option<String> {
            self.canned.clone()
        }
    }

    #[test]
    fn test_success_codes_never_error() {
        assert_eq!(check_status(0, None, &NoSource).unwrap(), 0);
        assert_eq!(check_status(42, Some("ignored"), &NoSource).unwrap(), 42);
        assert_eq!(check_status(i32::MAX, None, &NoSource).unwrap(), i32::MAX);
    }

    #[test]
    fn test_table_codes_map_to_exact_kinds() {
        let expected = [
            (CFD_ERROR, ErrorKind::Generic),
            (CFD_ERROR_NOMEM, ErrorKind::OutOfMemory),
            (CFD_ERROR_INVALID, ErrorKind::InvalidArgument),
            (CFD_ERROR_IO, ErrorKind::Io),
            (CFD_ERROR_UNSUPPORTED, ErrorKind::Unsupported),
            (CFD_ERROR_DIVERGED, ErrorKind::Diverged),
            (CFD_ERROR_MAX_ITER, ErrorKind::MaxIterationsReached),
        ];
        for (code, kind) in expected {
            let err = check_status(code, None, &NoSource).unwrap_err();
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status_code(), code);
        }
    }

    #[test]
    fn test_kind_table_is_injective() {
        let kinds = [
            ErrorKind::Generic,
            ErrorKind::OutOfMemory,
            ErrorKind::InvalidArgument,
            ErrorKind::Io,
            ErrorKind::Unsupported,
            ErrorKind::Diverged,
            ErrorKind::MaxIterationsReached,
        ];
        for kind in kinds {
            assert_eq!(ErrorKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn test_unmapped_negative_code_degrades_to_generic() {
        let err = check_status(-42, None, &NoSource).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        // The original code survives, not Generic's literal -1.
        assert_eq!(err.status_code(), -42);
        assert!(err.message().contains("CFD error code -42"));
    }

    #[test]
    fn test_last_error_takes_precedence() {
        let source = FixedSource {
            last: Some("CFL violated".to_string()),
            canned: Some("solver diverged".to_string()),
        };
        let err = check_status(CFD_ERROR_DIVERGED, None, &source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Diverged);
        assert_eq!(err.message(), "CFL violated");
    }

    #[test]
    fn test_empty_last_error_falls_back_to_canned() {
        let source = FixedSource {
            last: Some(String::new()),
            canned: Some("memory allocation failed".to_string()),
        };
        let err = check_status(CFD_ERROR_NOMEM, None, &source).unwrap_err();
        assert_eq!(err.message(), "memory allocation failed");
    }

    #[test]
    fn test_both_tiers_empty_falls_back_to_code_text() {
        let source = FixedSource {
            last: None,
            canned: Some(String::new()),
        };
        let err = check_status(CFD_ERROR_IO, None, &source).unwrap_err();
        assert_eq!(err.message(), "CFD error code -4");
    }

    #[test]
    fn test_context_is_prepended() {
        let err = check_status(CFD_ERROR_NOMEM, Some("during allocation"), &NoSource).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfMemory);
        assert_eq!(err.status_code(), CFD_ERROR_NOMEM);
        assert!(err.message().starts_with("during allocation: "));
    }

    #[test]
    fn test_empty_context_adds_no_prefix() {
        let source = FixedSource {
            last: Some("CFL violated".to_string()),
            canned: None,
        };
        let err = check_status(CFD_ERROR_DIVERGED, Some(""), &source).unwrap_err();
        assert_eq!(err.message(), "CFL violated");
    }

    #[test]
    fn test_translation_is_idempotent() {
        let source = FixedSource {
            last: Some("step failed".to_string()),
            canned: None,
        };
        let first = check_status(-6, Some("step 3"), &source).unwrap_err();
        let second = check_status(-6, Some("step 3"), &source).unwrap_err();
        assert_eq!(first.kind(), second.kind());
        assert_eq!(first.status_code(), second.status_code());
        assert_eq!(first.message(), second.message());
    }

    proptest! {
        #[test]
        fn prop_non_negative_is_always_success(code in 0..=i32::MAX) {
            prop_assert_eq!(check_status(code, Some("ctx"), &NoSource).unwrap(), code);
        }

        #[test]
        fn prop_negative_preserves_code(code in i32::MIN..0) {
            let err = check_status(code, None, &NoSource).unwrap_err();
            prop_assert_eq!(err.status_code(), code);
        }
    }
}
