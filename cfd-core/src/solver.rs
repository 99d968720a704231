//! Solver metadata and run statistics

use serde::{Deserialize, Serialize};

/// Capability bit flags reported by the native solver registry
pub mod capability {
    /// Incompressible flow support
    pub const INCOMPRESSIBLE: u32 = 1 << 0;
    /// Compressible flow support
    pub const COMPRESSIBLE: u32 = 1 << 1;
    /// Steady-state solution support
    pub const STEADY_STATE: u32 = 1 << 2;
    /// Transient solution support
    pub const TRANSIENT: u32 = 1 << 3;
    /// SIMD-optimized kernels
    pub const SIMD: u32 = 1 << 4;
    /// Multi-threaded (OpenMP) kernels
    pub const PARALLEL: u32 = 1 << 5;
    /// GPU (CUDA) kernels
    pub const GPU: u32 = 1 << 6;
}

/// Metadata describing one registered solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverInfo {
    /// Registry name, e.g. `"explicit_euler"`
    pub name: String,
    /// One-line human description
    pub description: String,
    /// Solver implementation version
    pub version: String,
    /// Capability bitmask, see [`capability`]
    pub capabilities: u32,
}

impl SolverInfo {
    /// True when the solver advertises the given capability bit(s).
    pub fn has_capability(&self, bits: u32) -> bool {
        self.capabilities & bits == bits
    }

    /// Decode the capability bitmask into the registry's string names.
    pub fn capability_names(&self) -> Vec<&'static str> {
        const TABLE: [(u32, &str); 7] = [
            (capability::INCOMPRESSIBLE, "incompressible"),
            (capability::COMPRESSIBLE, "compressible"),
            (capability::STEADY_STATE, "steady_state"),
            (capability::TRANSIENT, "transient"),
            (capability::SIMD, "simd"),
            (capability::PARALLEL, "parallel"),
            (capability::GPU, "gpu"),
        ];
        TABLE
            .iter()
            .filter(|(bit, _)| self.capabilities & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Statistics reported by the engine after a run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SolverStats {
    /// Iterations performed by the last iterative solve
    pub iterations: u32,
    /// Maximum velocity magnitude in the final field
    pub max_velocity: f64,
    /// Maximum pressure in the final field
    pub max_pressure: f64,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_time_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(capabilities: u32) -> SolverInfo {
        SolverInfo {
            name: "explicit_euler".to_string(),
            description: "Basic finite difference solver".to_string(),
            version: "1.0".to_string(),
            capabilities,
        }
    }

    #[test]
    fn test_capability_names_in_table_order() {
        let solver = info(capability::INCOMPRESSIBLE | capability::TRANSIENT | capability::SIMD);
        assert_eq!(
            solver.capability_names(),
            vec!["incompressible", "transient", "simd"]
        );
    }

    #[test]
    fn test_no_capabilities() {
        let solver = info(0);
        assert!(solver.capability_names().is_empty());
        assert!(!solver.has_capability(capability::GPU));
    }

    #[test]
    fn test_has_capability_requires_all_bits() {
        let solver = info(capability::SIMD | capability::PARALLEL);
        assert!(solver.has_capability(capability::SIMD));
        assert!(solver.has_capability(capability::SIMD | capability::PARALLEL));
        assert!(!solver.has_capability(capability::SIMD | capability::GPU));
    }
}
