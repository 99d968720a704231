//! Tiered package version resolution
//!
//! Prefers the linked engine's own version string, falls back to this
//! crate's version, and marks builds without a usable engine with a `-dev`
//! suffix so degraded installs are recognizable.

use crate::loader::LoadResult;

/// Version string this build was compiled from.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the user-visible package version for a given load outcome.
pub fn resolve_version(load: &LoadResult) -> String {
    match load {
        LoadResult::Ready(engine) => engine
            .version()
            .unwrap_or_else(|| CRATE_VERSION.to_string()),
        LoadResult::NotBuilt | LoadResult::LoadFailed { .. } => {
            format!("{CRATE_VERSION}-dev")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::testing::ScriptedNative;
    use std::sync::Arc;

    #[test]
    fn test_ready_engine_version_wins() {
        let load = LoadResult::Ready(Engine::new(Arc::new(ScriptedNative::new())));
        assert_eq!(resolve_version(&load), "0.3.0-scripted");
    }

    #[test]
    fn test_not_built_gets_dev_suffix() {
        let version = resolve_version(&LoadResult::NotBuilt);
        assert!(version.ends_with("-dev"));
        assert!(version.starts_with(CRATE_VERSION));
    }

    #[test]
    fn test_load_failed_gets_dev_suffix() {
        let load = LoadResult::LoadFailed {
            reason: "probe failed".to_string(),
        };
        assert!(resolve_version(&load).ends_with("-dev"));
    }
}
