//! One-shot resolution of native engine availability
//!
//! The original distribution distinguished "not built yet" from "built but
//! broken" by scanning the package directory for compiled artifacts. Here
//! the distinction is explicit: the `native-engine` cargo feature says
//! whether the engine is linked at all, and a single ABI probe decides
//! whether the linked engine is usable.

use crate::engine::Engine;
use thiserror::Error;

/// ABI revision this crate was written against. A linked engine reporting
/// anything else is rejected at load time.
pub const EXPECTED_ABI_VERSION: u32 = 3;

/// Startup outcome for the native engine
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// Engine linked, probed, and usable
    Ready(Engine),
    /// Workspace built without the `native-engine` feature
    NotBuilt,
    /// Engine linked but the load-time probe failed
    LoadFailed {
        /// Why the probe rejected the engine
        reason: String,
    },
}

impl LoadResult {
    /// The engine, or the corresponding [`LoadError`].
    pub fn engine(&self) -> Result<&Engine, LoadError> {
        match self {
            LoadResult::Ready(engine) => Ok(engine),
            LoadResult::NotBuilt => Err(LoadError::NotBuilt),
            LoadResult::LoadFailed { reason } => Err(LoadError::LoadFailed {
                reason: reason.clone(),
            }),
        }
    }

    /// True when the engine loaded and is usable.
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadResult::Ready(_))
    }
}

/// Why no usable engine is available
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The workspace was compiled without the engine.
    #[error("native CFD engine not built; rebuild with the 'native-engine' feature enabled")]
    NotBuilt,

    /// The engine is linked but unusable.
    #[error(
        "failed to load native CFD engine: {reason}. The engine is linked but could not be \
         initialized; this may indicate a missing dependency or ABI incompatibility"
    )]
    LoadFailed {
        /// Why the probe rejected the engine
        reason: String,
    },
}

/// Resolve engine availability. Called once at startup; the result is
/// cached by the caller, not here.
pub fn load() -> LoadResult {
    let result = probe();
    match &result {
        LoadResult::Ready(engine) => {
            log::debug!("native CFD engine loaded: version {:?}", engine.version())
        }
        LoadResult::NotBuilt => log::debug!("native CFD engine not built, running degraded"),
        LoadResult::LoadFailed { reason } => {
            log::warn!("native CFD engine failed to load: {reason}")
        }
    }
    result
}

#[cfg(feature = "native-engine")]
fn probe() -> LoadResult {
    use crate::api::NativeApi;
    use crate::ffi::FfiEngine;
    use std::sync::Arc;

    let native = FfiEngine::new();
    let abi = native.abi_version();
    if abi != EXPECTED_ABI_VERSION {
        return LoadResult::LoadFailed {
            reason: format!(
                "engine reports ABI version {abi}, expected {EXPECTED_ABI_VERSION}"
            ),
        };
    }
    LoadResult::Ready(Engine::new(Arc::new(native)))
}

#[cfg(not(feature = "native-engine"))]
fn probe() -> LoadResult {
    LoadResult::NotBuilt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedNative;
    use std::sync::Arc;

    #[test]
    fn test_default_build_reports_not_built() {
        // The test profile never enables native-engine.
        #[cfg(not(feature = "native-engine"))]
        {
            let result = load();
            assert!(!result.is_ready());
            assert_eq!(result.engine().unwrap_err(), LoadError::NotBuilt);
        }
    }

    #[test]
    fn test_not_built_message_names_the_feature() {
        let msg = LoadError::NotBuilt.to_string();
        assert!(msg.contains("not built"));
        assert!(msg.contains("native-engine"));
    }

    #[test]
    fn test_load_failed_preserves_reason() {
        let err = LoadError::LoadFailed {
            reason: "engine reports ABI version 1, expected 3".to_string(),
        };
        assert!(err.to_string().contains("ABI version 1"));
        assert!(err.to_string().contains("ABI incompatibility"));
    }

    #[test]
    fn test_ready_exposes_engine() {
        let result = LoadResult::Ready(Engine::new(Arc::new(ScriptedNative::new())));
        assert!(result.is_ready());
        assert!(result.engine().is_ok());
    }
}
