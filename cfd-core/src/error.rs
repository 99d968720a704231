//! The typed error raised for failed native operations

use crate::status::ErrorKind;
use thiserror::Error;

/// Error describing a failed native CFD operation
///
/// Carries the classified [`ErrorKind`], the original status code verbatim
/// (two failures that both classify as `Generic` stay distinguishable by
/// code), and a resolved diagnostic message. Constructed once at the
/// failure site and never mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (status={status_code})")]
pub struct CfdError {
    kind: ErrorKind,
    status_code: i32,
    message: String,
}

impl CfdError {
    /// Build an error from an explicit kind, status code and message.
    ///
    /// Used by the translator; callers that already know the classification
    /// usually want [`CfdError::with_kind`] instead.
    pub fn new(kind: ErrorKind, status_code: i32, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_code,
            message: message.into(),
        }
    }

    /// Build an error directly from a kind, using the kind's own table code.
    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, kind.code(), message)
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::InvalidArgument, message)
    }

    /// Shorthand for an [`ErrorKind::Unsupported`] error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Unsupported, message)
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The status code as returned by the native call, unrenormalized.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// The resolved diagnostic message, without the status suffix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_suffix() {
        let err = CfdError::new(ErrorKind::Diverged, -6, "CFL violated");
        assert_eq!(err.to_string(), "CFL violated (status=-6)");
    }

    #[test]
    fn test_with_kind_uses_table_code() {
        let err = CfdError::with_kind(ErrorKind::OutOfMemory, "alloc failed");
        assert_eq!(err.status_code(), -2);
        assert_eq!(err.kind(), ErrorKind::OutOfMemory);
    }

    #[test]
    fn test_new_preserves_unmapped_code() {
        let err = CfdError::new(ErrorKind::Generic, -99, "mystery");
        assert_eq!(err.status_code(), -99);
    }

    #[test]
    fn test_error_trait_object() {
        let err = CfdError::invalid_argument("nx must be positive");
        let _: &dyn std::error::Error = &err;
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.status_code(), -3);
    }
}
